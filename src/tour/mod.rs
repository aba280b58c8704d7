mod chooser;
mod hierholzer;
mod subtour;
mod tour;

pub use chooser::{Chooser, Scripted, Uniform};
pub use hierholzer::Hierholzer;
pub use subtour::{Subtour, splice};
pub use tour::Tour;
