mod view;

pub use view::AttendanceDetails;
