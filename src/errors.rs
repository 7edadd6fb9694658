use std::fmt;

impl From<serde_json::Error> for Error {
    fn from(f: serde_json::Error) -> Self {
        Error::BodyEncoding(f.to_string())
    }
}

macro_rules! errors {
    (
        [
            $(
                $(#[$docs1:meta])*
                ($name1:ident, $phrase1:expr);
            )+
        ],
        [
            $(
                $(#[$docs2:meta])*
                ($name2:ident, $type:ty, $phrase2:expr);
            )+
        ]
    ) => {
        #[derive(Clone, Debug, PartialEq)]
        pub enum Error {
            $(
                $(#[$docs1])*
                $name1,
            )+
            $(
                $(#[$docs2])*
                $name2($type),
            )+
        }

        impl Error {
            fn desc(&self) -> String {
                match &*self {
                    $(
                        Error::$name1 => String::from($phrase1),
                    )+
                    $(
                        Error::$name2(val) => format!("{}: {:?}", $phrase2, val),
                    )+
                }
            }
        }

        impl fmt::Display for Error {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.desc())
            }
        }

        impl std::error::Error for Error {}
    };
}

errors! {
    [
        /// The builder went away before any terminal method ran.
        (ResponseDropped, "Response dropped without being sent");
    ],
    [
        (BodyEncoding, String, "Failed to encode response body");
        (InvalidHeaderName, String, "Header name contains invalid token character");
        (InvalidHeaderValue, String, "Header value contains control character");
    ]
}
