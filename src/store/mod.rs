//! Local persistence of scratch sequences and saved figures

mod figures;
mod scratch;

pub use figures::FigureLibrary;
pub use scratch::ScratchStore;
