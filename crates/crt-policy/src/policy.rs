//! The `SelectionPolicy` trait — the per-state dwell-time extension point.

use crt_core::{AssetId, SimRng};

use crate::PolicyResult;

/// Decides which member assets are due to leave one state.
///
/// Each asset state owns one policy instance.  The pool keeps membership in
/// lock-step with asset state: an asset is [`egress`][Self::egress]ed (or
/// [`remove`][Self::remove]d) from its old state's policy before it
/// transitions and [`ingress`][Self::ingress]ed into the new state's policy
/// in the same step, so at any time each asset is a member of exactly one
/// policy.
///
/// # The draw budget is advisory
///
/// [`draw`][Self::draw] receives the day's demand as `budget`, but several
/// variants ignore it on purpose:
///
/// | Variant         | Uses `budget`?                                         |
/// |-----------------|--------------------------------------------------------|
/// | `Scrambling`    | yes, at most `budget` ids                              |
/// | `Lifo`          | yes, at most `budget` ids                              |
/// | `DelayedFifo`   | caps the ids returned, but *always* ages the queue     |
/// | `LogNormal`     | no: every expired countdown is returned                |
/// | `ConstantDelay` | no: every countdown at exactly zero is returned        |
/// | `Poisson`       | no: independent coin flip per member                   |
/// | `Sink`          | no: always empty                                       |
///
/// Callers must not assume `draw(n).len() <= n`.
///
/// # Draws are not idempotent
///
/// Stateful variants advance internal counters on every call, including a
/// zero-budget call.  Call `draw` exactly once per state per tick.
pub trait SelectionPolicy: Send {
    /// Short stable name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Add `id` to the membership.  Fails with `AlreadyMember` on a
    /// duplicate ingress.
    fn ingress(&mut self, id: AssetId, rng: &mut SimRng) -> PolicyResult<()>;

    /// Remove a member that the last draw reported as due.  Variants that
    /// track due-ness fail with `NotDue` for members that are not.
    fn egress(&mut self, id: AssetId) -> PolicyResult<()>;

    /// Remove a member regardless of whether it is due (out-of-band exits
    /// such as forced loss).
    fn remove(&mut self, id: AssetId) -> PolicyResult<()>;

    /// Return the ids currently due to leave.  May advance hidden per-member
    /// state as a side effect; see the trait docs.
    fn draw(&mut self, budget: usize, rng: &mut SimRng) -> Vec<AssetId>;

    fn contains(&self, id: AssetId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current members, in no particular order.
    fn members(&self) -> Vec<AssetId>;
}
