//! Identifiers for agents, proposals, and missions.
//!
//! The server owns the ID format; the SDK only keeps the three kinds apart
//! so a proposal id cannot be handed to `get_agent`. Each one serializes as
//! a bare JSON string and compares equal to plain `&str`.

use std::fmt;

use serde::{Deserialize, Serialize};

// One newtype per entry; each gets string conversions and comparisons so
// ids can go straight into client calls and test assertions.
macro_rules! string_ids {
    ($($(#[$meta:meta])* $name:ident;)+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap an id string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw id.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    )+};
}

string_ids! {
    /// Agent name as registered with the server, e.g. `"scout"`.
    AgentId;
    /// Proposal id assigned by the server on creation.
    ProposalId;
    /// Mission id assigned by the server.
    MissionId;
}
