mod eligibility_filter;
mod name_resolver;
mod path_relativizer;
mod root_resolver;
mod view_composer;

pub use eligibility_filter::{Eligibility, EligibilityFilter};
pub use name_resolver::{NameResolver, FALLBACK_BASE_NAME, VIEW_NAME_SUFFIX};
pub use path_relativizer::PathRelativizer;
pub use root_resolver::RootResolver;
pub use view_composer::{CompositionStats, ViewComposer, ViewComposition};
