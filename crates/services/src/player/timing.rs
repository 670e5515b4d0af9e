//! Fixed delays for auto-advance and checkpoint timeouts.

use std::time::Duration;

/// Pause after a correct quiz answer before moving on.
pub const QUIZ_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// How long a wrong answer stays highlighted before the slide resets for retry.
pub const WRONG_RESET_DELAY: Duration = Duration::from_millis(500);

/// Pause after a gap-fill reveal before moving on.
pub const GAP_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

/// Checkpoint slides self-advance after this timeout even without a tap.
pub const CHECKPOINT_TIMEOUT: Duration = Duration::from_millis(3500);
