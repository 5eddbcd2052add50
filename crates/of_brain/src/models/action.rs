use serde::{Deserialize, Serialize};
use std::fmt;

/// 틱마다 컨트롤러가 보고하는 이산 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Shoot,
    Pass,
    Intercept,
    #[default]
    Move,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Shoot, Action::Pass, Action::Intercept, Action::Move];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Shoot => "shoot",
            Action::Pass => "pass",
            Action::Intercept => "intercept",
            Action::Move => "move",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
