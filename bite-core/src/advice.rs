use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceTier {
    Poor,
    Weak,
    Average,
    Excellent,
    Ideal,
}

impl AdviceTier {
    /// Any integer is accepted; anything below 3 is `Poor`.
    pub fn from_score(score: i64) -> Self {
        match score {
            9.. => AdviceTier::Ideal,
            7..=8 => AdviceTier::Excellent,
            5..=6 => AdviceTier::Average,
            3..=4 => AdviceTier::Weak,
            _ => AdviceTier::Poor,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            AdviceTier::Ideal => "🌟 Ideal bite! Must go!",
            AdviceTier::Excellent => "🎣 Excellent bite. Chances very high!",
            AdviceTier::Average => "🐟 Average bite. Worth trying.",
            AdviceTier::Weak => "⚠ Weak bite. Low chance.",
            AdviceTier::Poor => "🚫 Poor bite. Better stay home.",
        }
    }
}

impl std::fmt::Display for AdviceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

pub fn advice_for(score: i64) -> &'static str {
    AdviceTier::from_score(score).text()
}
