pub mod ambience;
pub mod celebration;
pub mod particles;
pub mod petals;
pub mod session;
pub mod shapes;
