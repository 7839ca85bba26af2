//! Presentational widgets: each maps a small configuration (variant, label,
//! content) to rendered cells and owns no state. Any state they show (tab
//! index, carousel slide, modal open flag) belongs to the parent component.

pub mod alert;
pub mod badge;
pub mod card;
pub mod carousel;
pub mod modal;
pub mod scene;
pub mod skeleton;
pub mod spinner;
pub mod tabs;
pub mod tooltip;

pub use alert::Alert;
pub use badge::Badge;
pub use card::Card;
pub use carousel::Carousel;
pub use modal::Modal;
pub use scene::Scene;
pub use skeleton::SkeletonCard;
pub use spinner::Spinner;
pub use tabs::TabBar;
pub use tooltip::Tooltip;
