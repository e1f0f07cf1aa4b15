pub mod asset;
pub mod category;
pub mod cell;
pub mod function;
pub mod recommendation;
pub mod score;
pub mod tier;

pub use asset::Asset;
pub use category::Category;
pub use cell::{CellAddress, CellAssessment, CellStatus};
pub use function::Function;
pub use recommendation::Recommendation;
pub use score::{AssessmentScore, ScoreKey};
pub use tier::Tier;
