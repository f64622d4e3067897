//! One module per tour stop.

pub mod api;
pub mod async_data;
pub mod hooks;
pub mod language_features;
pub mod lifecycle;
pub mod navigation;
pub mod props_state;
pub mod state_management;

pub use async_data::AsyncDemo;
pub use hooks::HooksDemo;
pub use language_features::LanguageFeaturesDemo;
pub use lifecycle::LifecycleDemo;
pub use navigation::NavigationDemo;
pub use props_state::PropsVsStateDemo;
pub use state_management::StateManagementDemo;
