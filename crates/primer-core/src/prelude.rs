pub use crate::effects::{Dispose, on_unmount};
pub use crate::effects_ext::disposable_effect;
pub use crate::error::{CoreError, ErrorBoundary, ErrorInfo};
pub use crate::locals::{local, local_or_default, with_local};
pub use crate::runtime::{Frame, HitRegion, Scheduler, remember_with_key};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::semantics::Role;
pub use crate::signal::{Signal, signal};
pub use crate::state::{Reducer, Store, remember_memo, remember_reducer};
pub use crate::view::{Callback, TextStyle, View, ViewKind};
pub use crate::waker::FrameWaker;
