//! Vocabularies bound at the data-type layer.

use stannum_terminology::code_system;

code_system! {
    /// How a resource narrative was produced.
    pub enum NarrativeStatus ("NarrativeStatus", "http://hl7.org/fhir/narrative-status") {
        Generated / GENERATED => "generated", "Generated";
        Extensions / EXTENSIONS => "extensions", "Extensions";
        Additional / ADDITIONAL => "additional", "Additional";
        Empty / EMPTY => "empty", "Empty";
    }
}

code_system! {
    /// Relationship of a knowledge artifact to a related artifact.
    pub enum RelatedArtifactType ("RelatedArtifactType", "http://hl7.org/fhir/related-artifact-type") {
        Documentation / DOCUMENTATION => "documentation", "Documentation";
        Justification / JUSTIFICATION => "justification", "Justification";
        Citation / CITATION => "citation", "Citation";
        Predecessor / PREDECESSOR => "predecessor", "Predecessor";
        Successor / SUCCESSOR => "successor", "Successor";
        DerivedFrom / DERIVED_FROM => "derived-from", "Derived From";
        DependsOn / DEPENDS_ON => "depends-on", "Depends On";
        ComposedOf / COMPOSED_OF => "composed-of", "Composed Of";
        PartOf / PART_OF => "part-of", "Part Of";
        Amends / AMENDS => "amends", "Amends";
        AmendedWith / AMENDED_WITH => "amended-with", "Amended With";
        Appends / APPENDS => "appends", "Appends";
        AppendedWith / APPENDED_WITH => "appended-with", "Appended With";
        Cites / CITES => "cites", "Cites";
        CitedBy / CITED_BY => "cited-by", "Cited By";
        CommentsOn / COMMENTS_ON => "comments-on", "Is Comment On";
        CommentIn / COMMENT_IN => "comment-in", "Has Comment In";
        Contains / CONTAINS => "contains", "Contains";
        ContainedIn / CONTAINED_IN => "contained-in", "Contained In";
        Corrects / CORRECTS => "corrects", "Corrects";
        CorrectionIn / CORRECTION_IN => "correction-in", "Correction In";
        Replaces / REPLACES => "replaces", "Replaces";
        ReplacedWith / REPLACED_WITH => "replaced-with", "Replaced With";
        Retracts / RETRACTS => "retracts", "Retracts";
        RetractedBy / RETRACTED_BY => "retracted-by", "Retracted By";
        Signs / SIGNS => "signs", "Signs";
        SimilarTo / SIMILAR_TO => "similar-to", "Similar To";
        Supports / SUPPORTS => "supports", "Supports";
        SupportedWith / SUPPORTED_WITH => "supported-with", "Supported With";
        Transforms / TRANSFORMS => "transforms", "Transforms";
        TransformedInto / TRANSFORMED_INTO => "transformed-into", "Transformed Into";
        TransformedWith / TRANSFORMED_WITH => "transformed-with", "Transformed With";
        Documents / DOCUMENTS => "documents", "Documents";
        SpecificationOf / SPECIFICATION_OF => "specification-of", "Specification Of";
        CreatedWith / CREATED_WITH => "created-with", "Created With";
        CiteAs / CITE_AS => "cite-as", "Cite As";
    }
}

code_system! {
    /// Every type defined by FHIR: abstract bases, primitives, complex
    /// data types, and resources.
    ///
    /// The table legally contains siblings differing only by case — the
    /// primitive `code` next to the complex type `Coding` — so lookups
    /// must stay byte-exact.
    pub enum FhirTypes ("FHIRTypes", "http://hl7.org/fhir/fhir-types") {
        Base / BASE => "Base", "Base";
        Element / ELEMENT => "Element", "Element";
        BackboneElement / BACKBONE_ELEMENT => "BackboneElement", "BackboneElement";
        DataType / DATA_TYPE => "DataType", "DataType";
        Address / ADDRESS => "Address", "Address";
        Annotation / ANNOTATION => "Annotation", "Annotation";
        Attachment / ATTACHMENT => "Attachment", "Attachment";
        Availability / AVAILABILITY => "Availability", "Availability";
        BackboneType / BACKBONE_TYPE => "BackboneType", "BackboneType";
        Dosage / DOSAGE => "Dosage", "Dosage";
        ElementDefinition / ELEMENT_DEFINITION => "ElementDefinition", "ElementDefinition";
        MarketingStatus / MARKETING_STATUS => "MarketingStatus", "MarketingStatus";
        ProductShelfLife / PRODUCT_SHELF_LIFE => "ProductShelfLife", "ProductShelfLife";
        Timing / TIMING => "Timing", "Timing";
        CodeableConcept / CODEABLE_CONCEPT => "CodeableConcept", "CodeableConcept";
        CodeableReference / CODEABLE_REFERENCE => "CodeableReference", "CodeableReference";
        Coding / CODING => "Coding", "Coding";
        ContactDetail / CONTACT_DETAIL => "ContactDetail", "ContactDetail";
        ContactPoint / CONTACT_POINT => "ContactPoint", "ContactPoint";
        Contributor / CONTRIBUTOR => "Contributor", "Contributor";
        DataRequirement / DATA_REQUIREMENT => "DataRequirement", "DataRequirement";
        Expression / EXPRESSION => "Expression", "Expression";
        ExtendedContactDetail / EXTENDED_CONTACT_DETAIL => "ExtendedContactDetail", "ExtendedContactDetail";
        Extension / EXTENSION => "Extension", "Extension";
        HumanName / HUMAN_NAME => "HumanName", "HumanName";
        Identifier / IDENTIFIER => "Identifier", "Identifier";
        Meta / META => "Meta", "Meta";
        MonetaryComponent / MONETARY_COMPONENT => "MonetaryComponent", "MonetaryComponent";
        Money / MONEY => "Money", "Money";
        Narrative / NARRATIVE => "Narrative", "Narrative";
        ParameterDefinition / PARAMETER_DEFINITION => "ParameterDefinition", "ParameterDefinition";
        Period / PERIOD => "Period", "Period";
        PrimitiveType / PRIMITIVE_TYPE => "PrimitiveType", "PrimitiveType";
        Base64Binary / BASE64BINARY => "base64Binary", "base64Binary";
        Boolean / BOOLEAN => "boolean", "boolean";
        Date / DATE => "date", "date";
        DateTime / DATE_TIME => "dateTime", "dateTime";
        Decimal / DECIMAL => "decimal", "decimal";
        Instant / INSTANT => "instant", "instant";
        Integer / INTEGER => "integer", "integer";
        PositiveInt / POSITIVE_INT => "positiveInt", "positiveInt";
        UnsignedInt / UNSIGNED_INT => "unsignedInt", "unsignedInt";
        Integer64 / INTEGER64 => "integer64", "integer64";
        String / STRING => "string", "string";
        Code / CODE => "code", "code";
        Id / ID => "id", "id";
        Markdown / MARKDOWN => "markdown", "markdown";
        Time / TIME => "time", "time";
        Uri / URI => "uri", "uri";
        Canonical / CANONICAL => "canonical", "canonical";
        Oid / OID => "oid", "oid";
        Url / URL => "url", "url";
        Uuid / UUID => "uuid", "uuid";
        Quantity / QUANTITY => "Quantity", "Quantity";
        Age / AGE => "Age", "Age";
        Count / COUNT => "Count", "Count";
        Distance / DISTANCE => "Distance", "Distance";
        Duration / DURATION => "Duration", "Duration";
        Range / RANGE => "Range", "Range";
        Ratio / RATIO => "Ratio", "Ratio";
        RatioRange / RATIO_RANGE => "RatioRange", "RatioRange";
        Reference / REFERENCE => "Reference", "Reference";
        RelatedArtifact / RELATED_ARTIFACT => "RelatedArtifact", "RelatedArtifact";
        SampledData / SAMPLED_DATA => "SampledData", "SampledData";
        Signature / SIGNATURE => "Signature", "Signature";
        TriggerDefinition / TRIGGER_DEFINITION => "TriggerDefinition", "TriggerDefinition";
        UsageContext / USAGE_CONTEXT => "UsageContext", "UsageContext";
        VirtualServiceDetail / VIRTUAL_SERVICE_DETAIL => "VirtualServiceDetail", "VirtualServiceDetail";
        Xhtml / XHTML => "xhtml", "xhtml";
        Resource / RESOURCE => "Resource", "Resource";
        Binary / BINARY => "Binary", "Binary";
        Bundle / BUNDLE => "Bundle", "Bundle";
        DomainResource / DOMAIN_RESOURCE => "DomainResource", "DomainResource";
        Account / ACCOUNT => "Account", "Account";
        ActivityDefinition / ACTIVITY_DEFINITION => "ActivityDefinition", "ActivityDefinition";
        ActorDefinition / ACTOR_DEFINITION => "ActorDefinition", "ActorDefinition";
        AdministrableProductDefinition / ADMINISTRABLE_PRODUCT_DEFINITION => "AdministrableProductDefinition", "AdministrableProductDefinition";
        AdverseEvent / ADVERSE_EVENT => "AdverseEvent", "AdverseEvent";
        AllergyIntolerance / ALLERGY_INTOLERANCE => "AllergyIntolerance", "AllergyIntolerance";
        Appointment / APPOINTMENT => "Appointment", "Appointment";
        AppointmentResponse / APPOINTMENT_RESPONSE => "AppointmentResponse", "AppointmentResponse";
        ArtifactAssessment / ARTIFACT_ASSESSMENT => "ArtifactAssessment", "ArtifactAssessment";
        AuditEvent / AUDIT_EVENT => "AuditEvent", "AuditEvent";
        Basic / BASIC => "Basic", "Basic";
        BiologicallyDerivedProduct / BIOLOGICALLY_DERIVED_PRODUCT => "BiologicallyDerivedProduct", "BiologicallyDerivedProduct";
        BiologicallyDerivedProductDispense / BIOLOGICALLY_DERIVED_PRODUCT_DISPENSE => "BiologicallyDerivedProductDispense", "BiologicallyDerivedProductDispense";
        BodyStructure / BODY_STRUCTURE => "BodyStructure", "BodyStructure";
        CanonicalResource / CANONICAL_RESOURCE => "CanonicalResource", "CanonicalResource";
        CapabilityStatement / CAPABILITY_STATEMENT => "CapabilityStatement", "CapabilityStatement";
        CarePlan / CARE_PLAN => "CarePlan", "CarePlan";
        CareTeam / CARE_TEAM => "CareTeam", "CareTeam";
        ChargeItem / CHARGE_ITEM => "ChargeItem", "ChargeItem";
        ChargeItemDefinition / CHARGE_ITEM_DEFINITION => "ChargeItemDefinition", "ChargeItemDefinition";
        Citation / CITATION => "Citation", "Citation";
        Claim / CLAIM => "Claim", "Claim";
        ClaimResponse / CLAIM_RESPONSE => "ClaimResponse", "ClaimResponse";
        ClinicalImpression / CLINICAL_IMPRESSION => "ClinicalImpression", "ClinicalImpression";
        ClinicalUseDefinition / CLINICAL_USE_DEFINITION => "ClinicalUseDefinition", "ClinicalUseDefinition";
        CodeSystem / CODE_SYSTEM => "CodeSystem", "CodeSystem";
        Communication / COMMUNICATION => "Communication", "Communication";
        CommunicationRequest / COMMUNICATION_REQUEST => "CommunicationRequest", "CommunicationRequest";
        CompartmentDefinition / COMPARTMENT_DEFINITION => "CompartmentDefinition", "CompartmentDefinition";
        Composition / COMPOSITION => "Composition", "Composition";
        ConceptMap / CONCEPT_MAP => "ConceptMap", "ConceptMap";
        Condition / CONDITION => "Condition", "Condition";
        ConditionDefinition / CONDITION_DEFINITION => "ConditionDefinition", "ConditionDefinition";
        Consent / CONSENT => "Consent", "Consent";
        Contract / CONTRACT => "Contract", "Contract";
        Coverage / COVERAGE => "Coverage", "Coverage";
        CoverageEligibilityRequest / COVERAGE_ELIGIBILITY_REQUEST => "CoverageEligibilityRequest", "CoverageEligibilityRequest";
        CoverageEligibilityResponse / COVERAGE_ELIGIBILITY_RESPONSE => "CoverageEligibilityResponse", "CoverageEligibilityResponse";
        DetectedIssue / DETECTED_ISSUE => "DetectedIssue", "DetectedIssue";
        Device / DEVICE => "Device", "Device";
        DeviceAssociation / DEVICE_ASSOCIATION => "DeviceAssociation", "DeviceAssociation";
        DeviceDefinition / DEVICE_DEFINITION => "DeviceDefinition", "DeviceDefinition";
        DeviceDispense / DEVICE_DISPENSE => "DeviceDispense", "DeviceDispense";
        DeviceMetric / DEVICE_METRIC => "DeviceMetric", "DeviceMetric";
        DeviceRequest / DEVICE_REQUEST => "DeviceRequest", "DeviceRequest";
        DeviceUsage / DEVICE_USAGE => "DeviceUsage", "DeviceUsage";
        DiagnosticReport / DIAGNOSTIC_REPORT => "DiagnosticReport", "DiagnosticReport";
        DocumentReference / DOCUMENT_REFERENCE => "DocumentReference", "DocumentReference";
        Encounter / ENCOUNTER => "Encounter", "Encounter";
        EncounterHistory / ENCOUNTER_HISTORY => "EncounterHistory", "EncounterHistory";
        Endpoint / ENDPOINT => "Endpoint", "Endpoint";
        EnrollmentRequest / ENROLLMENT_REQUEST => "EnrollmentRequest", "EnrollmentRequest";
        EnrollmentResponse / ENROLLMENT_RESPONSE => "EnrollmentResponse", "EnrollmentResponse";
        EpisodeOfCare / EPISODE_OF_CARE => "EpisodeOfCare", "EpisodeOfCare";
        EventDefinition / EVENT_DEFINITION => "EventDefinition", "EventDefinition";
        Evidence / EVIDENCE => "Evidence", "Evidence";
        EvidenceReport / EVIDENCE_REPORT => "EvidenceReport", "EvidenceReport";
        EvidenceVariable / EVIDENCE_VARIABLE => "EvidenceVariable", "EvidenceVariable";
        ExampleScenario / EXAMPLE_SCENARIO => "ExampleScenario", "ExampleScenario";
        ExplanationOfBenefit / EXPLANATION_OF_BENEFIT => "ExplanationOfBenefit", "ExplanationOfBenefit";
        FamilyMemberHistory / FAMILY_MEMBER_HISTORY => "FamilyMemberHistory", "FamilyMemberHistory";
        Flag / FLAG => "Flag", "Flag";
        FormularyItem / FORMULARY_ITEM => "FormularyItem", "FormularyItem";
        GenomicStudy / GENOMIC_STUDY => "GenomicStudy", "GenomicStudy";
        Goal / GOAL => "Goal", "Goal";
        GraphDefinition / GRAPH_DEFINITION => "GraphDefinition", "GraphDefinition";
        Group / GROUP => "Group", "Group";
        GuidanceResponse / GUIDANCE_RESPONSE => "GuidanceResponse", "GuidanceResponse";
        HealthcareService / HEALTHCARE_SERVICE => "HealthcareService", "HealthcareService";
        ImagingSelection / IMAGING_SELECTION => "ImagingSelection", "ImagingSelection";
        ImagingStudy / IMAGING_STUDY => "ImagingStudy", "ImagingStudy";
        Immunization / IMMUNIZATION => "Immunization", "Immunization";
        ImmunizationEvaluation / IMMUNIZATION_EVALUATION => "ImmunizationEvaluation", "ImmunizationEvaluation";
        ImmunizationRecommendation / IMMUNIZATION_RECOMMENDATION => "ImmunizationRecommendation", "ImmunizationRecommendation";
        ImplementationGuide / IMPLEMENTATION_GUIDE => "ImplementationGuide", "ImplementationGuide";
        Ingredient / INGREDIENT => "Ingredient", "Ingredient";
        InsurancePlan / INSURANCE_PLAN => "InsurancePlan", "InsurancePlan";
        InventoryItem / INVENTORY_ITEM => "InventoryItem", "InventoryItem";
        InventoryReport / INVENTORY_REPORT => "InventoryReport", "InventoryReport";
        Invoice / INVOICE => "Invoice", "Invoice";
        Library / LIBRARY => "Library", "Library";
        Linkage / LINKAGE => "Linkage", "Linkage";
        List / LIST => "List", "List";
        Location / LOCATION => "Location", "Location";
        ManufacturedItemDefinition / MANUFACTURED_ITEM_DEFINITION => "ManufacturedItemDefinition", "ManufacturedItemDefinition";
        Measure / MEASURE => "Measure", "Measure";
        MeasureReport / MEASURE_REPORT => "MeasureReport", "MeasureReport";
        Medication / MEDICATION => "Medication", "Medication";
        MedicationAdministration / MEDICATION_ADMINISTRATION => "MedicationAdministration", "MedicationAdministration";
        MedicationDispense / MEDICATION_DISPENSE => "MedicationDispense", "MedicationDispense";
        MedicationKnowledge / MEDICATION_KNOWLEDGE => "MedicationKnowledge", "MedicationKnowledge";
        MedicationRequest / MEDICATION_REQUEST => "MedicationRequest", "MedicationRequest";
        MedicationStatement / MEDICATION_STATEMENT => "MedicationStatement", "MedicationStatement";
        MedicinalProductDefinition / MEDICINAL_PRODUCT_DEFINITION => "MedicinalProductDefinition", "MedicinalProductDefinition";
        MessageDefinition / MESSAGE_DEFINITION => "MessageDefinition", "MessageDefinition";
        MessageHeader / MESSAGE_HEADER => "MessageHeader", "MessageHeader";
        MetadataResource / METADATA_RESOURCE => "MetadataResource", "MetadataResource";
        MolecularSequence / MOLECULAR_SEQUENCE => "MolecularSequence", "MolecularSequence";
        NamingSystem / NAMING_SYSTEM => "NamingSystem", "NamingSystem";
        NutritionIntake / NUTRITION_INTAKE => "NutritionIntake", "NutritionIntake";
        NutritionOrder / NUTRITION_ORDER => "NutritionOrder", "NutritionOrder";
        NutritionProduct / NUTRITION_PRODUCT => "NutritionProduct", "NutritionProduct";
        Observation / OBSERVATION => "Observation", "Observation";
        ObservationDefinition / OBSERVATION_DEFINITION => "ObservationDefinition", "ObservationDefinition";
        OperationDefinition / OPERATION_DEFINITION => "OperationDefinition", "OperationDefinition";
        OperationOutcome / OPERATION_OUTCOME => "OperationOutcome", "OperationOutcome";
        Organization / ORGANIZATION => "Organization", "Organization";
        OrganizationAffiliation / ORGANIZATION_AFFILIATION => "OrganizationAffiliation", "OrganizationAffiliation";
        PackagedProductDefinition / PACKAGED_PRODUCT_DEFINITION => "PackagedProductDefinition", "PackagedProductDefinition";
        Patient / PATIENT => "Patient", "Patient";
        PaymentNotice / PAYMENT_NOTICE => "PaymentNotice", "PaymentNotice";
        PaymentReconciliation / PAYMENT_RECONCILIATION => "PaymentReconciliation", "PaymentReconciliation";
        Permission / PERMISSION => "Permission", "Permission";
        Person / PERSON => "Person", "Person";
        PlanDefinition / PLAN_DEFINITION => "PlanDefinition", "PlanDefinition";
        Practitioner / PRACTITIONER => "Practitioner", "Practitioner";
        PractitionerRole / PRACTITIONER_ROLE => "PractitionerRole", "PractitionerRole";
        Procedure / PROCEDURE => "Procedure", "Procedure";
        Provenance / PROVENANCE => "Provenance", "Provenance";
        Questionnaire / QUESTIONNAIRE => "Questionnaire", "Questionnaire";
        QuestionnaireResponse / QUESTIONNAIRE_RESPONSE => "QuestionnaireResponse", "QuestionnaireResponse";
        RegulatedAuthorization / REGULATED_AUTHORIZATION => "RegulatedAuthorization", "RegulatedAuthorization";
        RelatedPerson / RELATED_PERSON => "RelatedPerson", "RelatedPerson";
        RequestOrchestration / REQUEST_ORCHESTRATION => "RequestOrchestration", "RequestOrchestration";
        Requirements / REQUIREMENTS => "Requirements", "Requirements";
        ResearchStudy / RESEARCH_STUDY => "ResearchStudy", "ResearchStudy";
        ResearchSubject / RESEARCH_SUBJECT => "ResearchSubject", "ResearchSubject";
        RiskAssessment / RISK_ASSESSMENT => "RiskAssessment", "RiskAssessment";
        Schedule / SCHEDULE => "Schedule", "Schedule";
        SearchParameter / SEARCH_PARAMETER => "SearchParameter", "SearchParameter";
        ServiceRequest / SERVICE_REQUEST => "ServiceRequest", "ServiceRequest";
        Slot / SLOT => "Slot", "Slot";
        Specimen / SPECIMEN => "Specimen", "Specimen";
        SpecimenDefinition / SPECIMEN_DEFINITION => "SpecimenDefinition", "SpecimenDefinition";
        StructureDefinition / STRUCTURE_DEFINITION => "StructureDefinition", "StructureDefinition";
        StructureMap / STRUCTURE_MAP => "StructureMap", "StructureMap";
        Subscription / SUBSCRIPTION => "Subscription", "Subscription";
        SubscriptionStatus / SUBSCRIPTION_STATUS => "SubscriptionStatus", "SubscriptionStatus";
        SubscriptionTopic / SUBSCRIPTION_TOPIC => "SubscriptionTopic", "SubscriptionTopic";
        Substance / SUBSTANCE => "Substance", "Substance";
        SubstanceDefinition / SUBSTANCE_DEFINITION => "SubstanceDefinition", "SubstanceDefinition";
        SubstanceNucleicAcid / SUBSTANCE_NUCLEIC_ACID => "SubstanceNucleicAcid", "SubstanceNucleicAcid";
        SubstancePolymer / SUBSTANCE_POLYMER => "SubstancePolymer", "SubstancePolymer";
        SubstanceProtein / SUBSTANCE_PROTEIN => "SubstanceProtein", "SubstanceProtein";
        SubstanceReferenceInformation / SUBSTANCE_REFERENCE_INFORMATION => "SubstanceReferenceInformation", "SubstanceReferenceInformation";
        SubstanceSourceMaterial / SUBSTANCE_SOURCE_MATERIAL => "SubstanceSourceMaterial", "SubstanceSourceMaterial";
        SupplyDelivery / SUPPLY_DELIVERY => "SupplyDelivery", "SupplyDelivery";
        SupplyRequest / SUPPLY_REQUEST => "SupplyRequest", "SupplyRequest";
        Task / TASK => "Task", "Task";
        TerminologyCapabilities / TERMINOLOGY_CAPABILITIES => "TerminologyCapabilities", "TerminologyCapabilities";
        TestPlan / TEST_PLAN => "TestPlan", "TestPlan";
        TestReport / TEST_REPORT => "TestReport", "TestReport";
        TestScript / TEST_SCRIPT => "TestScript", "TestScript";
        Transport / TRANSPORT => "Transport", "Transport";
        ValueSet / VALUE_SET => "ValueSet", "ValueSet";
        VerificationResult / VERIFICATION_RESULT => "VerificationResult", "VerificationResult";
        VisionPrescription / VISION_PRESCRIPTION => "VisionPrescription", "VisionPrescription";
        Parameters / PARAMETERS => "Parameters", "Parameters";
    }
}
