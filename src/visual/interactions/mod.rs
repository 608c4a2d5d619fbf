pub mod accept;
pub mod evade;

pub use accept::{accept_hover_feedback, enter_celebration, handle_accept_press, handle_replay_press};
pub use evade::{
    EvadeSubscription, PointerInbox, drain_pointer_inbox, handle_evade_press, subscribe_evade_inbox,
    sync_evade_button,
};
