pub mod lanes;
pub mod layout;
pub mod recurrence;
pub mod reference_clock;
pub mod timeline;
