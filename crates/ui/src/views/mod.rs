mod state;
mod student;
mod teacher;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use state::{ViewError, ViewState, view_state_from_resource};
pub use student::StudentView;
pub use teacher::TeacherView;
