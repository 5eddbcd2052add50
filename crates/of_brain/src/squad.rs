//! SquadBrains - one controller per player id
//!
//! 매치 루프에서 한 틱에 모든 선수의 컨트롤러를 순서대로 업데이트하는 헬퍼.
//! 처음 보는 선수는 트레이너 팩토리로 컨트롤러를 새로 만든다.

use std::collections::BTreeMap;

use crate::brain::{BrainDecision, BrainObserver, BrainTrainer, Controller, PredictorFactory};
use crate::models::{BallState, Player, Team, TeamContext};

pub struct SquadBrains<P> {
    controllers: BTreeMap<u32, Controller<P>>,
}

impl<P> Default for SquadBrains<P> {
    fn default() -> Self {
        Self { controllers: BTreeMap::new() }
    }
}

impl<P> SquadBrains<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn get(&self, player_id: u32) -> Option<&Controller<P>> {
        self.controllers.get(&player_id)
    }

    pub fn remove(&mut self, player_id: u32) -> Option<Controller<P>> {
        self.controllers.remove(&player_id)
    }

    /// 모든 선수 1틱 업데이트
    ///
    /// `scoring_team`이 `Some(team)`이면 그 팀 선수에게 득점 틱으로 학습.
    /// 결과는 player id 오름차순.
    pub fn tick<F, O>(
        &mut self,
        trainer: &mut BrainTrainer<F, O>,
        scoring_team: Option<Team>,
        ball: &BallState,
        players: &[Player],
        context_for: impl Fn(&Player) -> TeamContext,
    ) -> Vec<(u32, BrainDecision)>
    where
        F: PredictorFactory<Output = P>,
        O: BrainObserver,
    {
        let mut decisions = Vec::with_capacity(players.len());
        for player in players {
            let controller = match self.controllers.remove(&player.id) {
                Some(controller) => controller,
                None => trainer.create_controller(),
            };
            let context = context_for(player);
            let is_scoring = scoring_team == Some(player.team);
            let updated = trainer.update_controller(controller, is_scoring, ball, player, &context);
            decisions.push((player.id, updated.decision()));
            self.controllers.insert(player.id, updated);
        }
        decisions.sort_by_key(|(id, _)| *id);
        decisions
    }
}
