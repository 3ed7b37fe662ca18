//! Status vocabularies bound by clinical and financial resources.

use stannum_terminology::code_system;

code_system! {
    /// Current state of an encounter.
    pub enum EncounterStatus ("EncounterStatus", "http://hl7.org/fhir/encounter-status") {
        /// The encounter has not yet started.
        Planned / PLANNED => "planned", "Planned";
        /// The encounter has begun and the patient is present.
        InProgress / IN_PROGRESS => "in-progress", "In Progress";
        /// The encounter has begun but is currently suspended.
        OnHold / ON_HOLD => "on-hold", "On Hold";
        /// The patient has been discharged but administrative
        /// activities are still in flight.
        Discharged / DISCHARGED => "discharged", "Discharged";
        /// The encounter has ended.
        Completed / COMPLETED => "completed", "Completed";
        /// The encounter was cancelled before it started.
        Cancelled / CANCELLED => "cancelled", "Cancelled";
        /// The encounter was stopped after it started but before completion.
        Discontinued / DISCONTINUED => "discontinued", "Discontinued";
        /// The record was entered in error and voided.
        EnteredInError / ENTERED_IN_ERROR => "entered-in-error", "Entered in Error";
        /// The state of the encounter is not known.
        Unknown / UNKNOWN => "unknown", "Unknown";
    }
}

code_system! {
    /// Degree of authority behind a care plan.
    ///
    /// Care plans draw their intent from the shared request-intent system;
    /// only this subset of its members is legal here.
    pub enum CarePlanIntent ("CarePlanIntent", "http://hl7.org/fhir/request-intent") {
        Proposal / PROPOSAL => "proposal", "Proposal";
        Plan / PLAN => "plan", "Plan";
        Order / ORDER => "order", "Order";
        Option / OPTION => "option", "Option";
        Directive / DIRECTIVE => "directive", "Directive";
    }
}

code_system! {
    /// Outcome of claim adjudication.
    pub enum ClaimOutcome ("ClaimOutcome", "http://hl7.org/fhir/claim-outcome") {
        Queued / QUEUED => "queued", "Queued";
        Complete / COMPLETE => "complete", "Processing Complete";
        Error / ERROR => "error", "Error";
        Partial / PARTIAL => "partial", "Partial Processing";
    }
}

code_system! {
    /// Lifecycle of a device dispense.
    pub enum DeviceDispenseStatus ("DeviceDispenseStatus", "http://hl7.org/fhir/devicedispense-status") {
        Preparation / PREPARATION => "preparation", "Preparation";
        InProgress / IN_PROGRESS => "in-progress", "In Progress";
        Cancelled / CANCELLED => "cancelled", "Cancelled";
        OnHold / ON_HOLD => "on-hold", "On Hold";
        Completed / COMPLETED => "completed", "Completed";
        EnteredInError / ENTERED_IN_ERROR => "entered-in-error", "Entered in Error";
        Stopped / STOPPED => "stopped", "Stopped";
        Declined / DECLINED => "declined", "Declined";
        Unknown / UNKNOWN => "unknown", "Unknown";
    }
}
