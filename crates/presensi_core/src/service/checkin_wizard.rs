//! Linear check-in wizard state machine.
//!
//! # Responsibility
//! - Sequence "choose type → verify location → capture selfie → submit"
//!   and forbid progressing past the location step while ineligible.
//!
//! # Invariants
//! - A rejected transition leaves the wizard state unchanged.
//! - The location guard is advisory UX only; the authoritative accept/deny
//!   decision belongs to the submission service.
//! - A failed submission keeps the wizard in `CaptureEvidence`; retry is
//!   manual, there is no automatic retry.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::attendance::{AttendanceKind, UserId};
use crate::model::geo::{Coordinate, ProximityResult};
use crate::service::attendance_service::SubmitAttendance;

/// Wizard position. Transitions only move forward, or back to
/// `ChooseType` via [`CheckinWizard::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ChooseType,
    VerifyLocation,
    CaptureEvidence,
    Submitted,
}

/// Rejected wizard transition.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardError {
    /// Location guard failed: the last fix is outside every zone.
    OutsideZone {
        nearest_distance_m: Option<f64>,
    },
    /// No non-empty evidence payload has been attached.
    MissingEvidence,
    /// No live location fix has arrived yet.
    MissingCoordinate,
    /// The operation is not valid at the current step.
    InvalidStep {
        expected: WizardStep,
        actual: WizardStep,
    },
}

impl Display for WizardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutsideZone {
                nearest_distance_m: Some(distance),
            } => write!(
                f,
                "outside every registered zone (nearest center {:.0} m away)",
                distance
            ),
            Self::OutsideZone {
                nearest_distance_m: None,
            } => write!(f, "outside every registered zone (no zone registered)"),
            Self::MissingEvidence => write!(f, "a selfie must be captured before submitting"),
            Self::MissingCoordinate => write!(f, "no location fix received yet"),
            Self::InvalidStep { expected, actual } => {
                write!(f, "expected wizard step {expected:?}, currently at {actual:?}")
            }
        }
    }
}

impl Error for WizardError {}

/// Client-side attendance wizard.
///
/// Holds the latest location fix ("last fix wins": a new fix simply
/// overwrites the previous one, evaluation is cheap and synchronous).
#[derive(Debug, Clone, PartialEq)]
pub struct CheckinWizard {
    step: WizardStep,
    kind: Option<AttendanceKind>,
    last_fix: Option<Coordinate>,
    evidence: Option<String>,
}

impl Default for CheckinWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckinWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::ChooseType,
            kind: None,
            last_fix: None,
            evidence: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn kind(&self) -> Option<AttendanceKind> {
        self.kind
    }

    pub fn last_fix(&self) -> Option<Coordinate> {
        self.last_fix
    }

    /// Records the newest location fix. Accepted at any step; the wizard
    /// only consumes the most recent one.
    pub fn update_fix(&mut self, fix: Coordinate) {
        self.last_fix = Some(fix);
    }

    /// `ChooseType -> VerifyLocation` with the selected action.
    pub fn choose(&mut self, kind: AttendanceKind) -> Result<(), WizardError> {
        self.expect_step(WizardStep::ChooseType)?;
        self.kind = Some(kind);
        self.step = WizardStep::VerifyLocation;
        Ok(())
    }

    /// `VerifyLocation -> CaptureEvidence`, guarded by zone membership.
    ///
    /// # Contract
    /// - Fails with [`WizardError::OutsideZone`] while
    ///   `proximity.within_any_zone` is false; the step is unchanged.
    pub fn confirm_location(&mut self, proximity: &ProximityResult) -> Result<(), WizardError> {
        self.expect_step(WizardStep::VerifyLocation)?;
        if self.last_fix.is_none() {
            return Err(WizardError::MissingCoordinate);
        }
        if !proximity.within_any_zone {
            return Err(WizardError::OutsideZone {
                nearest_distance_m: proximity.nearest_distance_m,
            });
        }
        self.step = WizardStep::CaptureEvidence;
        Ok(())
    }

    /// Attaches the captured selfie payload. Empty payloads are rejected.
    pub fn attach_evidence(&mut self, evidence: impl Into<String>) -> Result<(), WizardError> {
        self.expect_step(WizardStep::CaptureEvidence)?;
        let evidence = evidence.into();
        if evidence.is_empty() {
            return Err(WizardError::MissingEvidence);
        }
        self.evidence = Some(evidence);
        Ok(())
    }

    /// Builds the submission payload for the current wizard state.
    ///
    /// Requires a chosen kind, a non-empty evidence payload and a known
    /// coordinate. The wizard stays in `CaptureEvidence`: a network failure
    /// after this call loses nothing, and the caller retries manually.
    pub fn submission(&self, user_id: UserId) -> Result<SubmitAttendance, WizardError> {
        self.expect_step(WizardStep::CaptureEvidence)?;
        let kind = self.kind.ok_or(WizardError::InvalidStep {
            expected: WizardStep::ChooseType,
            actual: self.step,
        })?;
        let evidence = match self.evidence.as_deref() {
            Some(evidence) if !evidence.is_empty() => evidence.to_string(),
            _ => return Err(WizardError::MissingEvidence),
        };
        let coordinate = self.last_fix.ok_or(WizardError::MissingCoordinate)?;

        Ok(SubmitAttendance {
            user_id,
            kind,
            coordinate: Some(coordinate),
            address: Some(format!(
                "Lat: {:.4}, Lng: {:.4}",
                coordinate.latitude, coordinate.longitude
            )),
            selfie: Some(evidence),
        })
    }

    /// `CaptureEvidence -> Submitted`, to be called only after the server
    /// accepted the submission.
    pub fn mark_submitted(&mut self) -> Result<(), WizardError> {
        self.expect_step(WizardStep::CaptureEvidence)?;
        if self.evidence.as_deref().map_or(true, str::is_empty) {
            return Err(WizardError::MissingEvidence);
        }
        if self.last_fix.is_none() {
            return Err(WizardError::MissingCoordinate);
        }
        self.step = WizardStep::Submitted;
        Ok(())
    }

    /// Returns to `ChooseType`, clearing the chosen kind and evidence.
    /// The last location fix is kept; the watcher keeps it fresh anyway.
    pub fn reset(&mut self) {
        self.step = WizardStep::ChooseType;
        self.kind = None;
        self.evidence = None;
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step != expected {
            return Err(WizardError::InvalidStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}
