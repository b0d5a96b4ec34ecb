/// Email rendering modules
pub mod composer;

pub use composer::compose;
