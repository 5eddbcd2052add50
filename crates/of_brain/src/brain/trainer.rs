//! Online Trainer & Guard
//!
//! 틱마다 선수 한 명의 컨트롤러를 역할에 맞는 목표 쪽으로 한 번 학습시킨다.
//!
//! ## 흐름
//!
//! 1. validity check (stale → 교체)
//! 2. featurize
//! 3. 역할별 목표 합성 + 보상 스케일링
//! 4. 학습 1패스 (반복 상한 고정)
//! 5. 같은 입력으로 다시 실행 → 실제 출력
//! 6. 진단 (실패해도 무시)
//! 7. validity re-check (induced → 교체)
//! 8. 결과 패키징
//!
//! `update_controller`는 에러를 반환하지 않으며 항상 사용 가능한 컨트롤러를 돌려준다.

use super::classifier;
use super::controller::Controller;
use super::features::{Featurizer, FieldFeaturizer, InputFeatures};
use super::guard::validity_report;
use super::network::FeedForwardFactory;
use super::observer::{BrainObserver, ResetReason, TracingObserver, TrainingTrace};
use super::output::OutputChannels;
use super::predictor::{Predictor, PredictorFactory, TrainOptions, TrainingReport, TrainingSample};
use super::synthesis::TargetSynthesizer;
use crate::config::BrainConfig;
use crate::error::{BrainError, Result};
use crate::models::{BallState, Player, TeamContext};

pub struct BrainTrainer<F = FeedForwardFactory, O = TracingObserver>
where
    F: PredictorFactory,
    O: BrainObserver,
{
    config: BrainConfig,
    factory: F,
    featurizer: Box<dyn Featurizer>,
    synthesizer: TargetSynthesizer,
    observer: O,
}

impl BrainTrainer<FeedForwardFactory, TracingObserver> {
    pub fn new(config: BrainConfig) -> Self {
        Self::with_observer(config, TracingObserver)
    }
}

impl<O: BrainObserver> BrainTrainer<FeedForwardFactory, O> {
    pub fn with_observer(config: BrainConfig, observer: O) -> Self {
        let factory = FeedForwardFactory::new(config.network.clone());
        BrainTrainer::with_parts(config, factory, observer)
    }
}

impl<F, O> BrainTrainer<F, O>
where
    F: PredictorFactory,
    O: BrainObserver,
{
    pub fn with_parts(config: BrainConfig, factory: F, observer: O) -> Self {
        let featurizer = Box::new(FieldFeaturizer::new(config.field.clone()));
        let synthesizer = TargetSynthesizer::new(config.goalkeeper.clone());
        Self { config, factory, featurizer, synthesizer, observer }
    }

    pub fn with_featurizer(mut self, featurizer: Box<dyn Featurizer>) -> Self {
        self.featurizer = featurizer;
        self
    }

    pub fn config(&self) -> &BrainConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// 새 (미학습) 컨트롤러
    pub fn create_controller(&mut self) -> Controller<F::Output> {
        Controller::new(self.factory.create())
    }

    pub fn make_input(&self, ball: &BallState, player: &Player, context: &TeamContext) -> InputFeatures {
        self.featurizer.make_input(ball, &player.position, context)
    }

    /// 역할별 목표 + 보상 스케일링
    pub fn synthesize_target(
        &self,
        is_scoring: bool,
        input: &InputFeatures,
        player: &Player,
        ball: &BallState,
        context: &TeamContext,
    ) -> OutputChannels {
        self.synthesizer
            .synthesize(player.role, input, player, ball, context)
            .scaled(self.config.training.reward_multiplier(is_scoring))
    }

    /// 학습 1패스 후 같은 입력으로 다시 실행한 출력
    pub fn train_step(
        &self,
        net: &mut F::Output,
        input: &InputFeatures,
        target: &OutputChannels,
        is_scoring: bool,
    ) -> Result<(OutputChannels, TrainingReport)> {
        self.train_with(net, input, target, &self.config.training.options_for(is_scoring))
    }

    fn train_with(
        &self,
        net: &mut F::Output,
        input: &InputFeatures,
        target: &OutputChannels,
        options: &TrainOptions,
    ) -> Result<(OutputChannels, TrainingReport)> {
        let sample = TrainingSample { input: input.to_array().to_vec(), output: target.to_array().to_vec() };

        let report = net.train(std::slice::from_ref(&sample), options)?;
        let raw = net.run(&sample.input)?;
        Ok((OutputChannels::from_raw(&raw), report))
    }

    pub fn update_controller(
        &mut self,
        mut controller: Controller<F::Output>,
        is_scoring: bool,
        ball: &BallState,
        player: &Player,
        context: &TeamContext,
    ) -> Controller<F::Output> {
        if let Err(cause) = validity_report(&controller.net) {
            return self.reset(player, ResetReason::Stale, &cause);
        }

        let input = self.make_input(ball, player, context);
        let target = self.synthesize_target(is_scoring, &input, player, ball, context);

        let options = self.config.training.options_for(is_scoring);
        let (output, report) = match self.train_with(&mut controller.net, &input, &target, &options) {
            Ok(result) => result,
            Err(cause) => return self.reset(player, ResetReason::Induced, &cause),
        };

        let shapes = match controller.net.layer_shapes() {
            Ok(shapes) => Some(shapes),
            Err(err) => {
                self.observer.on_introspection_error(player, &err);
                None
            }
        };
        self.observer.on_trained(
            player,
            &TrainingTrace {
                input: &input,
                target: &target,
                output: &output,
                report: &report,
                learning_rate: options.learning_rate,
                layer_shapes: shapes.as_deref(),
            },
        );

        if let Err(cause) = validity_report(&controller.net) {
            return self.reset(player, ResetReason::Induced, &cause);
        }

        let decision = classifier::package(&output, &self.config.actions);
        controller.last_output = decision.movement;
        controller.last_action = decision.action;
        controller.last_report = Some(report);
        controller
    }

    fn reset(&mut self, player: &Player, reason: ResetReason, cause: &BrainError) -> Controller<F::Output> {
        self.observer.on_reset(player, reason, cause);
        self.create_controller()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::network::FeedForwardNet;
    use crate::brain::observer::{BrainEvent, RecordingObserver};
    use crate::brain::predictor::LayerShape;
    use crate::models::{Action, Position, Role, Team};
    use std::cell::Cell;

    fn recording_trainer() -> BrainTrainer<FeedForwardFactory, RecordingObserver> {
        BrainTrainer::with_observer(BrainConfig::default(), RecordingObserver::new())
    }

    fn red_context() -> TeamContext {
        TeamContext::for_team(Team::Red, &BrainConfig::default().field)
    }

    fn forward() -> Player {
        Player::new(9, Team::Red, Role::Forward, Position::new(500.0, 300.0))
    }

    fn ball_toward_red_goal() -> BallState {
        BallState::new(Position::new(600.0, 300.0), Position::new(-5.0, 0.0))
    }

    fn assert_report_bounded(report: &TrainingReport) {
        assert!(report.iterations >= 1 && report.iterations <= 300);
        assert!(report.error < 0.001 || report.iterations == 300, "{:?}", report);
        assert!(report.error.is_finite());
    }

    #[test]
    fn test_forward_end_to_end() {
        let mut trainer = recording_trainer();
        let player = forward();
        let ball = ball_toward_red_goal();
        let ctx = red_context();

        let input = trainer.make_input(&ball, &player, &ctx);
        let target = trainer.synthesize_target(false, &input, &player, &ball, &ctx);
        assert_eq!(target.move_x, 1.0);
        assert_eq!(target.intercept, 0.2);

        let controller = trainer.create_controller();
        let controller = trainer.update_controller(controller, false, &ball, &player, &ctx);

        let report = controller.last_report.expect("trained");
        assert_report_bounded(&report);

        // 액션은 학습 후 재실행 출력에서 나와야 함
        let rerun = OutputChannels::from_raw(&controller.net.run(&input.to_array()).unwrap());
        assert_eq!(controller.last_output, rerun.movement());
        assert_eq!(controller.last_action, classifier::classify(&rerun, &trainer.config().actions));

        assert_eq!(trainer.observer().reset_count(), 0);
        assert!(matches!(trainer.observer().events[0], BrainEvent::Trained { player_id: 9, .. }));
    }

    #[test]
    fn test_scoring_doubles_target() {
        let trainer = recording_trainer();
        let player = Player::new(4, Team::Red, Role::Midfielder, Position::new(300.0, 200.0));
        let ball = ball_toward_red_goal();
        let ctx = red_context();
        let input = trainer.make_input(&ball, &player, &ctx);

        let normal = trainer.synthesize_target(false, &input, &player, &ball, &ctx);
        let scoring = trainer.synthesize_target(true, &input, &player, &ball, &ctx);
        assert_eq!(scoring, normal.scaled(2.0));
        assert_eq!(scoring.move_x, 1.6);
        assert_eq!(scoring.intercept, 1.0);
    }

    #[test]
    fn test_stale_untrained_controller_is_replaced() {
        let mut trainer = recording_trainer();
        let controller = Controller::untrained();

        let result = trainer.update_controller(controller, false, &ball_toward_red_goal(), &forward(), &red_context());

        // 같은 시드의 팩토리가 처음 만드는 네트워크와 동일
        let expected = FeedForwardFactory::new(BrainConfig::default().network).create();
        assert_eq!(result.net, expected);
        assert_eq!(result.last_output, Position::ZERO);
        assert_eq!(result.last_action, Action::Move);
        assert!(result.is_fresh());

        let resets: Vec<_> = trainer.observer().resets().collect();
        assert_eq!(resets.len(), 1);
        assert!(matches!(
            resets[0],
            BrainEvent::Reset { player_id: 9, team: Team::Red, role: Role::Forward, reason: ResetReason::Stale, .. }
        ));
    }

    #[test]
    fn test_stale_nan_controller_is_replaced() {
        let mut trainer = recording_trainer();
        let mut controller = trainer.create_controller();
        controller.net.layers[0].weights[(0, 0)] = f32::NAN;
        let poisoned = controller.net.clone();

        let result = trainer.update_controller(controller, true, &ball_toward_red_goal(), &forward(), &red_context());
        assert_ne!(result.net, poisoned);
        assert!(crate::brain::guard::is_valid(&result.net));
        assert!(result.is_fresh());
        assert_eq!(trainer.observer().reset_count(), 1);
    }

    #[test]
    fn test_replaced_controller_trains_next_tick() {
        let mut trainer = recording_trainer();
        let ball = ball_toward_red_goal();
        let ctx = red_context();

        let controller = trainer.update_controller(Controller::untrained(), false, &ball, &forward(), &ctx);
        assert!(controller.is_fresh());
        let controller = trainer.update_controller(controller, false, &ball, &forward(), &ctx);
        assert!(!controller.is_fresh());
        assert_eq!(trainer.observer().reset_count(), 1);
    }

    #[test]
    fn test_repeated_updates_drift_within_bounds() {
        let mut trainer = recording_trainer();
        let ball = ball_toward_red_goal();
        let ctx = red_context();
        let player = Player::new(1, Team::Red, Role::Goalkeeper, Position::new(30.0, 300.0));

        let mut controller = trainer.create_controller();
        for tick in 0..3 {
            controller = trainer.update_controller(controller, tick == 1, &ball, &player, &ctx);
            assert_report_bounded(&controller.last_report.expect("trained"));
            assert!(controller.last_output.x.abs() <= 1.0);
            assert!(controller.last_output.y.abs() <= 1.0);
        }
        assert_eq!(trainer.observer().reset_count(), 0);
    }

    // ------------------------------------------------------------------
    // Scripted predictor for induced failures
    // ------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Script {
        poison_after_train: bool,
        fail_train: bool,
        /// n번째 layer_shapes 호출마다 실패 (0 = 실패 없음)
        flaky_shapes_every: u32,
    }

    #[derive(Debug, Clone)]
    struct ScriptedNet {
        inner: FeedForwardNet,
        script: Script,
        shape_calls: Cell<u32>,
        trained_learning_rate: Option<f32>,
    }

    impl Predictor for ScriptedNet {
        fn run(&self, input: &[f32]) -> Result<Vec<f32>> {
            self.inner.run(input)
        }

        fn train(&mut self, samples: &[TrainingSample], options: &TrainOptions) -> Result<TrainingReport> {
            if self.script.fail_train {
                return Err(BrainError::EmptyBatch);
            }
            self.trained_learning_rate = Some(options.learning_rate);
            let report = self.inner.train(samples, options)?;
            if self.script.poison_after_train {
                self.inner.layers[1].weights[(0, 0)] = f32::INFINITY;
            }
            Ok(report)
        }

        fn layer_shapes(&self) -> Result<Vec<LayerShape>> {
            let n = self.shape_calls.get() + 1;
            self.shape_calls.set(n);
            let every = self.script.flaky_shapes_every;
            if every > 0 && n % every == 0 {
                return Err(BrainError::Untrained);
            }
            self.inner.layer_shapes()
        }

        fn first_non_finite_layer(&self) -> Option<usize> {
            self.inner.first_non_finite_layer()
        }
    }

    struct ScriptedFactory {
        inner: FeedForwardFactory,
        script: Script,
    }

    impl PredictorFactory for ScriptedFactory {
        type Output = ScriptedNet;

        fn create(&mut self) -> ScriptedNet {
            ScriptedNet {
                inner: self.inner.create(),
                script: self.script.clone(),
                shape_calls: Cell::new(0),
                trained_learning_rate: None,
            }
        }
    }

    fn scripted_trainer() -> BrainTrainer<ScriptedFactory, RecordingObserver> {
        let factory = ScriptedFactory { inner: FeedForwardFactory::default(), script: Script::default() };
        BrainTrainer::with_parts(BrainConfig::default(), factory, RecordingObserver::new())
    }

    fn scripted(script: Script) -> Controller<ScriptedNet> {
        let inner = FeedForwardFactory::new(crate::config::NetworkConfig { seed: 99, ..Default::default() }).create();
        Controller::new(ScriptedNet { inner, script, shape_calls: Cell::new(0), trained_learning_rate: None })
    }

    #[test]
    fn test_training_induced_corruption_replaces_controller() {
        let mut trainer = scripted_trainer();
        let controller = scripted(Script { poison_after_train: true, ..Default::default() });

        let result = trainer.update_controller(controller, false, &ball_toward_red_goal(), &forward(), &red_context());

        assert_eq!(result.net.script, Script::default());
        assert!(result.is_fresh());
        let resets: Vec<_> = trainer.observer().resets().collect();
        assert_eq!(resets.len(), 1);
        assert!(matches!(resets[0], BrainEvent::Reset { reason: ResetReason::Induced, .. }));
    }

    #[test]
    fn test_training_error_replaces_controller() {
        let mut trainer = scripted_trainer();
        let controller = scripted(Script { fail_train: true, ..Default::default() });

        let result = trainer.update_controller(controller, true, &ball_toward_red_goal(), &forward(), &red_context());
        assert!(!result.net.script.fail_train);
        assert!(matches!(
            trainer.observer().resets().next(),
            Some(BrainEvent::Reset { reason: ResetReason::Induced, .. })
        ));
    }

    #[test]
    fn test_introspection_failure_does_not_interrupt_update() {
        let mut trainer = scripted_trainer();
        // 1: pre-check OK, 2: 진단 실패, 3: post-check OK
        let controller = scripted(Script { flaky_shapes_every: 2, ..Default::default() });

        let result = trainer.update_controller(controller, false, &ball_toward_red_goal(), &forward(), &red_context());

        assert!(!result.is_fresh());
        assert_eq!(result.net.script.flaky_shapes_every, 2);
        assert_eq!(trainer.observer().reset_count(), 0);
        assert!(trainer
            .observer()
            .events
            .iter()
            .any(|e| matches!(e, BrainEvent::IntrospectionFailed { player_id: 9, .. })));
    }

    #[derive(Default)]
    struct RateObserver {
        rates: Vec<f32>,
    }

    impl BrainObserver for RateObserver {
        fn on_reset(&mut self, _player: &Player, _reason: ResetReason, _cause: &BrainError) {}

        fn on_trained(&mut self, _player: &Player, trace: &TrainingTrace<'_>) {
            self.rates.push(trace.learning_rate);
        }
    }

    #[test]
    fn test_trace_reports_learning_rate_used_for_training() {
        let factory = ScriptedFactory { inner: FeedForwardFactory::default(), script: Script::default() };
        let mut trainer = BrainTrainer::with_parts(BrainConfig::default(), factory, RateObserver::default());
        let ball = ball_toward_red_goal();
        let ctx = red_context();

        let scoring = trainer.update_controller(scripted(Script::default()), true, &ball, &forward(), &ctx);
        assert_eq!(scoring.net.trained_learning_rate, Some(0.1));
        let steady = trainer.update_controller(scripted(Script::default()), false, &ball, &forward(), &ctx);
        assert_eq!(steady.net.trained_learning_rate, Some(0.03));

        assert_eq!(trainer.observer().rates, vec![0.1, 0.03]);
    }

    #[test]
    fn test_train_step_uses_scoring_learning_rate() {
        let trainer = scripted_trainer();
        let mut net = scripted(Script::default()).net;
        let player = forward();
        let ball = ball_toward_red_goal();
        let ctx = red_context();
        let input = trainer.make_input(&ball, &player, &ctx);
        let target = trainer.synthesize_target(true, &input, &player, &ball, &ctx);

        let (output, report) = trainer.train_step(&mut net, &input, &target, true).unwrap();
        assert_eq!(net.trained_learning_rate, Some(0.1));
        assert_report_bounded(&report);
        assert_eq!(output, OutputChannels::from_raw(&net.run(&input.to_array()).unwrap()));
    }
}
