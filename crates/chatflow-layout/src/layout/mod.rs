pub mod container;
pub mod line;
pub mod run;
pub mod selection;

pub use container::{CopyMode, LayoutContainer, MessageFlags};
pub use line::Line;
pub use run::{DirectionalRun, RunContext};
pub use selection::{Selection, SelectionPoint};
