pub mod loader;
pub mod record;
pub mod view;

pub use loader::DetailLoader;
pub use record::{Ability, AbilityKey, BuildLinks, DetailRecord, SkinVariant};
pub use view::{AbilitySection, DetailView, SkinGallery};
