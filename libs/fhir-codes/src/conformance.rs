//! Vocabularies used by the conformance and testing layers.

use stannum_terminology::code_system;

code_system! {
    /// Publication lifecycle of a conformance resource.
    pub enum PublicationStatus ("PublicationStatus", "http://hl7.org/fhir/publication-status") {
        Draft / DRAFT => "draft", "Draft";
        Active / ACTIVE => "active", "Active";
        Retired / RETIRED => "retired", "Retired";
        Unknown / UNKNOWN => "unknown", "Unknown";
    }
}

code_system! {
    /// Published FHIR versions, as dotted release literals.
    pub enum FhirVersion ("FHIRVersion", "http://hl7.org/fhir/FHIR-version") {
        Version4_0_1 / VERSION_4_0_1 => "4.0.1", "4.0.1";
        Version4_1 / VERSION_4_1 => "4.1", "4.1";
        Version4_1_0 / VERSION_4_1_0 => "4.1.0", "4.1.0";
        Version4_2 / VERSION_4_2 => "4.2", "4.2";
        Version4_2_0 / VERSION_4_2_0 => "4.2.0", "4.2.0";
        Version4_3 / VERSION_4_3 => "4.3", "4.3";
        Version4_3_0 / VERSION_4_3_0 => "4.3.0", "4.3.0";
        Version4_3_0Cibuild / VERSION_4_3_0_CIBUILD => "4.3.0-cibuild", "4.3.0-cibuild";
        Version4_3_0Snapshot1 / VERSION_4_3_0_SNAPSHOT1 => "4.3.0-snapshot1", "4.3.0-snapshot1";
        Version4_4 / VERSION_4_4 => "4.4", "4.4";
        Version4_4_0 / VERSION_4_4_0 => "4.4.0", "4.4.0";
        Version4_5 / VERSION_4_5 => "4.5", "4.5";
        Version4_5_0 / VERSION_4_5_0 => "4.5.0", "4.5.0";
        Version4_6 / VERSION_4_6 => "4.6", "4.6";
        Version4_6_0 / VERSION_4_6_0 => "4.6.0", "4.6.0";
        Version5_0 / VERSION_5_0 => "5.0", "5.0";
        Version5_0_0 / VERSION_5_0_0 => "5.0.0", "5.0.0";
        Version5_0_0Cibuild / VERSION_5_0_0_CIBUILD => "5.0.0-cibuild", "5.0.0-cibuild";
        Version5_0_0Snapshot1 / VERSION_5_0_0_SNAPSHOT1 => "5.0.0-snapshot1", "5.0.0-snapshot1";
        Version5_0_0Snapshot2 / VERSION_5_0_0_SNAPSHOT2 => "5.0.0-snapshot2", "5.0.0-snapshot2";
        Version5_0_0Ballot / VERSION_5_0_0_BALLOT => "5.0.0-ballot", "5.0.0-ballot";
        Version5_0_0Snapshot3 / VERSION_5_0_0_SNAPSHOT3 => "5.0.0-snapshot3", "5.0.0-snapshot3";
        Version5_0_0DraftFinal / VERSION_5_0_0_DRAFT_FINAL => "5.0.0-draft-final", "5.0.0-draft-final";
    }
}

code_system! {
    /// Search parameter modifiers.
    pub enum SearchModifierCode ("SearchModifierCode", "http://hl7.org/fhir/search-modifier-code") {
        Missing / MISSING => "missing", "Missing";
        Exact / EXACT => "exact", "Exact";
        Contains / CONTAINS => "contains", "Contains";
        Not / NOT => "not", "Not";
        Text / TEXT => "text", "Text";
        In / IN => "in", "In";
        NotIn / NOT_IN => "not-in", "Not In";
        Below / BELOW => "below", "Below";
        Above / ABOVE => "above", "Above";
        Type / TYPE => "type", "Type";
        Identifier / IDENTIFIER => "identifier", "Identifier";
        OfType / OF_TYPE => "of-type", "Of Type";
        CodeText / CODE_TEXT => "code-text", "Code Text";
        TextAdvanced / TEXT_ADVANCED => "text-advanced", "Text Advanced";
        Iterate / ITERATE => "iterate", "Iterate";
    }
}

code_system! {
    /// HTTP response classes a TestScript assertion can expect.
    ///
    /// Wire literals are camelCase, unlike most sibling vocabularies.
    pub enum AssertionResponseTypes ("AssertionResponseTypes", "http://hl7.org/fhir/assert-response-code-types") {
        Continue / CONTINUE => "continue", "Continue";
        SwitchingProtocols / SWITCHING_PROTOCOLS => "switchingProtocols", "Switching Protocols";
        Okay / OKAY => "okay", "OK";
        Created / CREATED => "created", "Created";
        Accepted / ACCEPTED => "accepted", "Accepted";
        NonAuthoritativeInformation / NON_AUTHORITATIVE_INFORMATION => "nonAuthoritativeInformation", "Non-Authoritative Information";
        NoContent / NO_CONTENT => "noContent", "No Content";
        ResetContent / RESET_CONTENT => "resetContent", "Reset Content";
        PartialContent / PARTIAL_CONTENT => "partialContent", "Partial Content";
        MultipleChoices / MULTIPLE_CHOICES => "multipleChoices", "Multiple Choices";
        MovedPermanently / MOVED_PERMANENTLY => "movedPermanently", "Moved Permanently";
        Found / FOUND => "found", "Found";
        SeeOther / SEE_OTHER => "seeOther", "See Other";
        NotModified / NOT_MODIFIED => "notModified", "Not Modified";
        UseProxy / USE_PROXY => "useProxy", "Use Proxy";
        TemporaryRedirect / TEMPORARY_REDIRECT => "temporaryRedirect", "Temporary Redirect";
        PermanentRedirect / PERMANENT_REDIRECT => "permanentRedirect", "Permanent Redirect";
        BadRequest / BAD_REQUEST => "badRequest", "Bad Request";
        Unauthorized / UNAUTHORIZED => "unauthorized", "Unauthorized";
        PaymentRequired / PAYMENT_REQUIRED => "paymentRequired", "Payment Required";
        Forbidden / FORBIDDEN => "forbidden", "Forbidden";
        NotFound / NOT_FOUND => "notFound", "Not Found";
        MethodNotAllowed / METHOD_NOT_ALLOWED => "methodNotAllowed", "Method Not Allowed";
        NotAcceptable / NOT_ACCEPTABLE => "notAcceptable", "Not Acceptable";
        ProxyAuthenticationRequired / PROXY_AUTHENTICATION_REQUIRED => "proxyAuthenticationRequired", "Proxy Authentication Required";
        RequestTimeout / REQUEST_TIMEOUT => "requestTimeout", "Request Timeout";
        Conflict / CONFLICT => "conflict", "Conflict";
        Gone / GONE => "gone", "Gone";
        LengthRequired / LENGTH_REQUIRED => "lengthRequired", "Length Required";
        PreconditionFailed / PRECONDITION_FAILED => "preconditionFailed", "Precondition Failed";
        ContentTooLarge / CONTENT_TOO_LARGE => "contentTooLarge", "Content Too Large";
        UriTooLong / URI_TOO_LONG => "uriTooLong", "URI Too Long";
        UnsupportedMediaType / UNSUPPORTED_MEDIA_TYPE => "unsupportedMediaType", "Unsupported Media Type";
        RangeNotSatisfiable / RANGE_NOT_SATISFIABLE => "rangeNotSatisfiable", "Range Not Satisfiable";
        ExpectationFailed / EXPECTATION_FAILED => "expectationFailed", "Expectation Failed";
        MisdirectedRequest / MISDIRECTED_REQUEST => "misdirectedRequest", "Misdirected Request";
        UnprocessableContent / UNPROCESSABLE_CONTENT => "unprocessableContent", "Unprocessable Content";
        UpgradeRequired / UPGRADE_REQUIRED => "upgradeRequired", "Upgrade Required";
        InternalServerError / INTERNAL_SERVER_ERROR => "internalServerError", "Internal Server Error";
        NotImplemented / NOT_IMPLEMENTED => "notImplemented", "Not Implemented";
        BadGateway / BAD_GATEWAY => "badGateway", "Bad Gateway";
        ServiceUnavailable / SERVICE_UNAVAILABLE => "serviceUnavailable", "Service Unavailable";
        GatewayTimeout / GATEWAY_TIMEOUT => "gatewayTimeout", "Gateway Timeout";
        HttpVersionNotSupported / HTTP_VERSION_NOT_SUPPORTED => "httpVersionNotSupported", "HTTP Version Not Supported";
    }
}
