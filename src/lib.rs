#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod id_generator;
pub mod input;
pub mod manipulation;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod tool;
pub mod widgets;

pub use app::PaintApp;
pub use command::{CommitKind, History, HistoryEntry, RedoPolicy, Snapshot};
pub use config::CanvasConfig;
pub use id_generator::ShapeId;
pub use input::{InputEvent, InputHandler};
pub use manipulation::{ManipulationEnd, Manipulator};
pub use renderer::ShapeRenderer;
pub use shape::Shape;
pub use state::{DrawingSession, EditorState};
pub use tool::Tool;
