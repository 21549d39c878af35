use roster_business::{BusinessConfig, Notices, UserActionCompute, UserQueryCompute, UsersPageState};
use roster_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl State {
    fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(Notices::new());
        ctx.add_state(UsersPageState::new());
        ctx.record_compute(UserQueryCompute::default());
        ctx.record_compute(UserActionCompute::default());

        Self { ctx }
    }

    /// State wired against a caller-provided service base URL (tests).
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}
