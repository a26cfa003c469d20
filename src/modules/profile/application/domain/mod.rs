pub mod entities;
pub mod form_state;
pub mod policies;
pub mod validation;
