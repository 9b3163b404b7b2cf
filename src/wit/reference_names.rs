//! Well-known work item field reference names.
//!
//! Field reference names are stable, schema-namespaced string identifiers
//! (e.g. `System.Title`). The tables below cover the built-in `System.*`
//! fields plus the `Microsoft.VSTS.*` fields of the standard process
//! templates, grouped by owning schema.

/// `System.*` fields present on every work item type.
pub mod system {
    pub const ID: &str = "System.Id";
    pub const TITLE: &str = "System.Title";
    pub const AREA_PATH: &str = "System.AreaPath";
    pub const TEAM_PROJECT: &str = "System.TeamProject";
    pub const ITERATION_PATH: &str = "System.IterationPath";
    pub const WORK_ITEM_TYPE: &str = "System.WorkItemType";
    pub const STATE: &str = "System.State";
    pub const REASON: &str = "System.Reason";
    pub const ASSIGNED_TO: &str = "System.AssignedTo";
    pub const CREATED_DATE: &str = "System.CreatedDate";
    pub const CREATED_BY: &str = "System.CreatedBy";
    pub const CHANGED_DATE: &str = "System.ChangedDate";
    pub const CHANGED_BY: &str = "System.ChangedBy";
    pub const DESCRIPTION: &str = "System.Description";
    pub const HISTORY: &str = "System.History";
    pub const TAGS: &str = "System.Tags";
    pub const REV: &str = "System.Rev";
}

/// Link and attachment count fields.
pub mod links {
    pub const ATTACHED_FILE_COUNT: &str = "System.AttachedFileCount";
    pub const EXTERNAL_LINK_COUNT: &str = "System.ExternalLinkCount";
    pub const HYPER_LINK_COUNT: &str = "System.HyperLinkCount";
    pub const RELATED_LINK_COUNT: &str = "System.RelatedLinkCount";

    pub const LINK_TYPE: &str = "System.Links.LinkType";
    pub const LINK_COMMENT: &str = "System.Links.Comment";
    pub const LINK_DESCRIPTION: &str = "System.Links.Description";
}

/// `Microsoft.VSTS.Common.*` fields shared across process templates.
pub mod common {
    pub const ACTIVITY: &str = "Microsoft.VSTS.Common.Activity";
    pub const ACTIVATED_BY: &str = "Microsoft.VSTS.Common.ActivatedBy";
    pub const ACTIVATED_DATE: &str = "Microsoft.VSTS.Common.ActivatedDate";
    pub const BACKLOG_PRIORITY: &str = "Microsoft.VSTS.Common.BacklogPriority";
    pub const CLOSED_BY: &str = "Microsoft.VSTS.Common.ClosedBy";
    pub const CLOSED_DATE: &str = "Microsoft.VSTS.Common.ClosedDate";
    pub const PRIORITY: &str = "Microsoft.VSTS.Common.Priority";
    pub const RESOLVED_BY: &str = "Microsoft.VSTS.Common.ResolvedBy";
    pub const RESOLVED_DATE: &str = "Microsoft.VSTS.Common.ResolvedDate";
    pub const RESOLVED_REASON: &str = "Microsoft.VSTS.Common.ResolvedReason";
    pub const RESOLUTION: &str = "Microsoft.VSTS.Common.Resolution";
    pub const RISK: &str = "Microsoft.VSTS.Common.Risk";
    pub const SEVERITY: &str = "Microsoft.VSTS.Common.Severity";
    pub const STACK_RANK: &str = "Microsoft.VSTS.Common.StackRank";
    pub const TIME_CRITICALITY: &str = "Microsoft.VSTS.Common.TimeCriticality";
    pub const TRIAGE: &str = "Microsoft.VSTS.Common.Triage";
    pub const VALUE_AREA: &str = "Microsoft.VSTS.Common.ValueArea";
    pub const BUSINESS_VALUE: &str = "Microsoft.VSTS.Common.BusinessValue";
    pub const DISCIPLINE: &str = "Microsoft.VSTS.Common.Discipline";
    pub const ACCEPTANCE_CRITERIA: &str = "Microsoft.VSTS.Common.AcceptanceCriteria";
    pub const REVIEWED_BY: &str = "Microsoft.VSTS.Common.ReviewedBy";
    pub const REVIEWED_DATE: &str = "Microsoft.VSTS.Common.ReviewedDate";
    pub const STATE_CODE: &str = "Microsoft.VSTS.Common.StateCode";
    pub const STATE_CHANGE_DATE: &str = "Microsoft.VSTS.Common.StateChangeDate";
    pub const RATING: &str = "Microsoft.VSTS.Common.Rating";
    pub const ISSUE: &str = "Microsoft.VSTS.Common.Issue";
}

/// `Microsoft.VSTS.Scheduling.*` effort and date fields.
pub mod scheduling {
    pub const COMPLETED_WORK: &str = "Microsoft.VSTS.Scheduling.CompletedWork";
    pub const DUE_DATE: &str = "Microsoft.VSTS.Scheduling.DueDate";
    pub const EFFORT: &str = "Microsoft.VSTS.Scheduling.Effort";
    pub const FINISH_DATE: &str = "Microsoft.VSTS.Scheduling.FinishDate";
    pub const STORY_POINTS: &str = "Microsoft.VSTS.Scheduling.StoryPoints";
    pub const SIZE: &str = "Microsoft.VSTS.Scheduling.Size";
    pub const REMAINING_WORK: &str = "Microsoft.VSTS.Scheduling.RemainingWork";
    pub const START_DATE: &str = "Microsoft.VSTS.Scheduling.StartDate";
    pub const TARGET_DATE: &str = "Microsoft.VSTS.Scheduling.TargetDate";
}

/// `Microsoft.VSTS.TCM.*` test case management fields.
pub mod tcm {
    pub const REPRO_STEPS: &str = "Microsoft.VSTS.TCM.ReproSteps";
    pub const SYSTEM_INFO: &str = "Microsoft.VSTS.TCM.SystemInfo";
    pub const AUTOMATION_STATUS: &str = "Microsoft.VSTS.TCM.AutomationStatus";
    pub const PARAMETERS: &str = "Microsoft.VSTS.TCM.Parameters";
    pub const STEPS: &str = "Microsoft.VSTS.TCM.Steps";
    pub const TEST_SUITE_TYPE: &str = "Microsoft.VSTS.TCM.TestSuiteType";
    pub const TEST_SUITE_TYPE_ID: &str = "Microsoft.VSTS.TCM.TestSuiteTypeId";
    pub const TEST_SUITE_AUDIT: &str = "Microsoft.VSTS.TCM.TestSuiteAudit";
    pub const AUTOMATED_TEST_STORAGE: &str = "Microsoft.VSTS.TCM.AutomatedTestStorage";
    pub const AUTOMATED_TEST_TYPE: &str = "Microsoft.VSTS.TCM.AutomatedTestType";
    pub const AUTOMATED_TEST_ID: &str = "Microsoft.VSTS.TCM.AutomatedTestId";
    pub const AUTOMATED_TEST_NAME: &str = "Microsoft.VSTS.TCM.AutomatedTestName";
    pub const LOCAL_DATA_SOURCE: &str = "Microsoft.VSTS.TCM.LocalDataSource";
    pub const QUERY_TEXT: &str = "Microsoft.VSTS.TCM.QueryText";
}

/// `Microsoft.VSTS.CMMI.*` fields of the CMMI process template.
pub mod cmmi {
    pub const REQUIRES_REVIEW: &str = "Microsoft.VSTS.CMMI.RequiresReview";
    pub const REQUIRES_TEST: &str = "Microsoft.VSTS.CMMI.RequiresTest";
    pub const TASK_TYPE: &str = "Microsoft.VSTS.CMMI.TaskType";
    pub const PURPOSE: &str = "Microsoft.VSTS.CMMI.Purpose";
    pub const COMMENTS: &str = "Microsoft.VSTS.CMMI.Comments";
    pub const MINUTES: &str = "Microsoft.VSTS.CMMI.Minutes";
    pub const MEETING_TYPE: &str = "Microsoft.VSTS.CMMI.MeetingType";
    pub const CALLED_DATE: &str = "Microsoft.VSTS.CMMI.CalledDate";
    pub const CALLED_BY: &str = "Microsoft.VSTS.CMMI.CalledBy";
    pub const SYMPTOM: &str = "Microsoft.VSTS.CMMI.Symptom";
    pub const PROPOSED_FIX: &str = "Microsoft.VSTS.CMMI.ProposedFix";
    pub const FOUND_IN_ENVIRONMENT: &str = "Microsoft.VSTS.CMMI.FoundInEnvironment";
    pub const ROOT_CAUSE: &str = "Microsoft.VSTS.CMMI.RootCause";
    pub const HOW_FOUND: &str = "Microsoft.VSTS.CMMI.HowFound";
    pub const ANALYSIS: &str = "Microsoft.VSTS.CMMI.Analysis";
    pub const CORRECTIVE_ACTION_PLAN: &str = "Microsoft.VSTS.CMMI.CorrectiveActionPlan";
    pub const TARGET_RESOLVE_DATE: &str = "Microsoft.VSTS.CMMI.TargetResolveDate";
    pub const CONTINGENCY_PLAN: &str = "Microsoft.VSTS.CMMI.ContingencyPlan";
    pub const MITIGATION_PLAN: &str = "Microsoft.VSTS.CMMI.MitigationPlan";
    pub const PROBABILITY: &str = "Microsoft.VSTS.CMMI.Probability";
    pub const REQUIREMENT_TYPE: &str = "Microsoft.VSTS.CMMI.RequirementType";
    pub const USER_ACCEPTANCE_TEST: &str = "Microsoft.VSTS.CMMI.UserAcceptanceTest";

    /// Reference name for subject matter expert #`expert_number` (1-3 as of writing).
    pub fn subject_matter_expert(expert_number: u8) -> String {
        format!("Microsoft.VSTS.CMMI.SubjectMatterExpert{expert_number}")
    }

    /// Reference name for required attendee #`attendee_number` (1-8 as of writing).
    pub fn required_attendee(attendee_number: u8) -> String {
        format!("Microsoft.VSTS.CMMI.RequiredAttendee{attendee_number}")
    }

    /// Reference name for optional attendee #`attendee_number` (1-8 as of writing).
    pub fn optional_attendee(attendee_number: u8) -> String {
        format!("Microsoft.VSTS.CMMI.OptionalAttendee{attendee_number}")
    }

    /// Reference name for actual attendee #`attendee_number` (1-8 as of writing).
    pub fn actual_attendee(attendee_number: u8) -> String {
        format!("Microsoft.VSTS.CMMI.ActualAttendee{attendee_number}")
    }
}

/// `Microsoft.VSTS.CodeReview.*` fields.
pub mod code_review {
    pub const ACCEPTED_BY: &str = "Microsoft.VSTS.CodeReview.AcceptedBy";
    pub const ACCEPTED_DATE: &str = "Microsoft.VSTS.CodeReview.AcceptedDate";
    pub const CONTEXT: &str = "Microsoft.VSTS.CodeReview.Context";
    pub const CONTEXT_CODE: &str = "Microsoft.VSTS.CodeReview.ContextCode";
    pub const CONTEXT_OWNER: &str = "Microsoft.VSTS.CodeReview.ContextOwner";
    pub const CONTEXT_TYPE: &str = "Microsoft.VSTS.CodeReview.ContextType";
    pub const CLOSED_STATUS: &str = "Microsoft.VSTS.CodeReview.ClosedStatus";
    pub const CLOSED_STATUS_CODE: &str = "Microsoft.VSTS.CodeReview.ClosedStatusCode";
}

/// `Microsoft.VSTS.Feedback.*` fields.
pub mod feedback {
    pub const APPLICATION_LAUNCH_INSTRUCTIONS: &str =
        "Microsoft.VSTS.Feedback.ApplicationLaunchInstructions";
    pub const APPLICATION_START_INFORMATION: &str =
        "Microsoft.VSTS.Feedback.ApplicationStartInformation";
    pub const APPLICATION_TYPE: &str = "Microsoft.VSTS.Feedback.ApplicationType";
}
