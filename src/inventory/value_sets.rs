// src/inventory/value_sets.rs

//! Fixed reference list of standard value-set names
//!
//! The describe service does not enumerate standard value sets, so the
//! known names are carried here as a design constant. Sets absent from a
//! given org are skipped by the retrieval service without error.

pub const STANDARD_VALUE_SETS: &[&str] = &[
    "AccountContactMultiRoles",
    "AccountContactRole",
    "AccountOwnership",
    "AccountRating",
    "AccountType",
    "AssetActionCategory",
    "AssetRelationshipType",
    "AssetStatus",
    "CampaignMemberStatus",
    "CampaignStatus",
    "CampaignType",
    "CareBarrierPriority",
    "CareBenefitVerifyRequestStatus",
    "CareObservationCategory",
    "CarePlanActivityStatus",
    "CareRegisteredDeviceStatus",
    "CaseContactRole",
    "CaseOrigin",
    "CasePriority",
    "CaseReason",
    "CaseStatus",
    "CaseType",
    "ChangeRequestBusinessReason",
    "ChangeRequestCategory",
    "ChangeRequestImpact",
    "ChangeRequestPriority",
    "ChangeRequestRelatedItemImpactLevel",
    "ChangeRequestRiskLevel",
    "ChangeRequestStatus",
    "ConsequenceOfFailure",
    "ContactPointAddressType",
    "ContactPointUsageType",
    "ContactRequestReason",
    "ContactRequestStatus",
    "ContactRole",
    "ContractContactRole",
    "ContractStatus",
    "DigitalAssetStatus",
    "EntitlementType",
    "EventSubject",
    "EventType",
    "FiscalYearPeriodName",
    "FiscalYearPeriodPrefix",
    "FiscalYearQuarterName",
    "FiscalYearQuarterPrefix",
    "FulfillmentStatus",
    "FulfillmentType",
    "IdeaCategory",
    "IdeaMultiCategory",
    "IdeaStatus",
    "IdeaThemeStatus",
    "IncidentCategory",
    "IncidentImpact",
    "IncidentPriority",
    "IncidentRelatedItemImpactLevel",
    "IncidentRelatedItemImpactType",
    "IncidentReportedMethod",
    "IncidentStatus",
    "IncidentSubCategory",
    "IncidentType",
    "IncidentUrgency",
    "Industry",
    "LeadSource",
    "LeadStatus",
    "LocationType",
    "OpportunityCompetitor",
    "OpportunityStage",
    "OpportunityType",
    "OrderItemSummaryChgRsn",
    "OrderStatus",
    "OrderSummaryRoutingSchdRsn",
    "OrderSummaryStatus",
    "OrderType",
    "PartnerRole",
    "ProblemCategory",
    "ProblemImpact",
    "ProblemPriority",
    "ProblemRelatedItemImpactLevel",
    "ProblemRelatedItemImpactType",
    "ProblemStatus",
    "ProblemSubCategory",
    "ProblemUrgency",
    "ProcessExceptionCategory",
    "ProcessExceptionPriority",
    "ProcessExceptionSeverity",
    "ProcessExceptionStatus",
    "Product2Family",
    "ProductRequestStatus",
    "QuantityUnitOfMeasure",
    "QuestionOrigin",
    "QuickTextCategory",
    "QuickTextChannel",
    "QuoteStatus",
    "ResourceAbsenceType",
    "ReturnOrderLineItemReasonForRejection",
    "ReturnOrderLineItemReasonForReturn",
    "ReturnOrderLineItemRepaymentMethod",
    "ReturnOrderShipmentType",
    "ReturnOrderStatus",
    "RoleInTerritory2",
    "SalesTeamRole",
    "Salutation",
    "ServTerrMemRoleType",
    "ServiceAppointmentStatus",
    "ServiceContractApprovalStatus",
    "ShiftStatus",
    "SocialPostClassification",
    "SocialPostEngagementLevel",
    "SocialPostReviewedStatus",
    "SolutionStatus",
    "TaskPriority",
    "TaskStatus",
    "TaskSubject",
    "TaskType",
    "UnitOfMeasure",
    "WorkOrderLineItemPriority",
    "WorkOrderLineItemStatus",
    "WorkOrderPriority",
    "WorkOrderStatus",
    "WorkTypeDefApptType",
    "WorkTypeGroupAddInfo",
];
