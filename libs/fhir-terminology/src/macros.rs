/// Defines a closed vocabulary: one fieldless `Copy` enum, its
/// [`Vocabulary`](crate::Vocabulary) implementation, and one prebuilt
/// [`Code`](crate::Code) constant per member.
///
/// One invocation per code system replaces the one-generated-class-per-
/// vocabulary pattern; the only thing that varies between invocations is
/// the literal table. Literal spellings are preserved byte-for-byte, so a
/// table may contain members differing only by case.
///
/// ```rust
/// use stannum_terminology::{code_system, Code, Vocabulary};
///
/// code_system! {
///     /// Status of a background job.
///     pub enum JobStatus ("JobStatus", "http://example.org/fhir/job-status") {
///         Queued / QUEUED => "queued", "Queued";
///         Running / RUNNING => "running", "Running";
///         Done / DONE => "done", "Done";
///     }
/// }
///
/// assert_eq!(JobStatus::from_code("running").unwrap(), JobStatus::Running);
/// assert_eq!(JobStatus::RUNNING, Code::of(JobStatus::Running));
/// assert!(JobStatus::from_code("Running").is_err());
/// ```
#[macro_export]
macro_rules! code_system {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($fhir_name:literal, $system:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident / $constant:ident => $code:literal, $display:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::Vocabulary for $name {
            const NAME: &'static str = $fhir_name;
            const SYSTEM: &'static str = $system;
            const CONCEPTS: &'static [$crate::Concept] = &[
                $( $crate::Concept { code: $code, display: $display }, )+
            ];

            fn code(self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            fn display(self) -> &'static str {
                match self {
                    $( Self::$variant => $display, )+
                }
            }

            fn from_code(code: &str) -> $crate::Result<Self> {
                match code {
                    $( $code => Ok(Self::$variant), )+
                    _ => Err($crate::Error::UnrecognizedCode {
                        code: code.to_owned(),
                        system: $system,
                    }),
                }
            }

            fn values() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }
        }

        impl $name {
            $(
                #[doc = concat!("Prebuilt code value for `", $code, "`.")]
                pub const $constant: $crate::Code<$name> =
                    $crate::Code::of($name::$variant);
            )+
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Vocabulary::code(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::Vocabulary>::from_code(s)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str($crate::Vocabulary::code(*self))
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let code =
                    <::std::string::String as $crate::serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                <Self as $crate::Vocabulary>::from_code(&code)
                    .map_err(|e| <D::Error as $crate::serde::de::Error>::custom(e))
            }
        }
    };
}
