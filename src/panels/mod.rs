mod central_panel;
mod history_panel;
mod toolbar;

pub use central_panel::canvas_panel;
pub use history_panel::history_panel;
pub use toolbar::toolbar;
