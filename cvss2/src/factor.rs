/// Declare a metric family from its table.
///
/// Each row is `Variant = "code", "label", weight;`. Optional metrics add
/// `not_defined Variant = weight;` after the table. That variant gets the code
/// "ND" and the label "Not Defined", and also accepts the empty code.
macro_rules! factor {
    (@not_defined) => { ::core::option::Option::None };
    (@not_defined $nd:ident) => { ::core::option::Option::Some(Self::$nd) };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($title:literal, $group:ident) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal, $label:literal, $weight:literal;
            )+
        }
        $(not_defined $nd:ident = $nd_weight:literal;)?
    ) => {
        $(#[$meta])*
        #[derive(
            Copy,
            Clone,
            Debug,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            strum::VariantArray,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
            $(
                /// Not Defined
                #[serde(rename = "ND", alias = "")]
                $nd,
            )?
        }

        impl $crate::Factor for $name {
            const NAME: &'static str = $title;
            const GROUP: $crate::MetricGroup = $crate::MetricGroup::$group;
            const NOT_DEFINED: Option<Self> = factor!(@not_defined $($nd)?);

            fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                    $(Self::$nd => $crate::NOT_DEFINED_CODE,)?
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                    $(Self::$nd => $crate::NOT_DEFINED_LABEL,)?
                }
            }

            fn weight(self) -> f64 {
                match self {
                    $(Self::$variant => $weight,)+
                    $(Self::$nd => $nd_weight,)?
                }
            }
        }

        impl $crate::MetricFactor for $name {
            fn is_valid(&self) -> bool {
                true
            }

            fn is_defined(&self) -> bool {
                !$crate::Factor::is_not_defined(*self)
            }

            fn score(&self) -> Result<f64, $crate::Error> {
                Ok($crate::Factor::weight(*self))
            }

            fn long_form(&self) -> &str {
                $crate::Factor::label(*self)
            }

            fn short_form(&self) -> &str {
                $crate::Factor::code(*self)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::Factor>::from_code(s)
                    .ok_or_else(|| $crate::Error::invalid_code($title, s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::Factor::label(*self))
            }
        }

        impl utoipa::PartialSchema for $name {
            fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
                $crate::schema::factor_schema::<Self>()
            }
        }

        impl utoipa::ToSchema for $name {}
    };
}
