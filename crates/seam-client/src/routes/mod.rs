//! Resource façade
//!
//! One `SeamClient` method per remote operation. Each method turns its typed
//! request into a [`RequestDescriptor`](crate::http::RequestDescriptor),
//! dispatches it through [`SeamClient::make_request`](crate::SeamClient::make_request)
//! and unwraps the payload's designated sub-field. No business validation
//! happens here; the platform reports bad input as
//! [`SeamError::MalformedInput`](crate::SeamError::MalformedInput).
//!
//! List operations accept a `limit` where the platform does, but expose no
//! cursor: the platform caps result sets, so callers must not assume an
//! unbounded listing.

mod access_codes;
mod action_attempts;
mod client_sessions;
mod connect_webviews;
mod connected_accounts;
mod devices;
mod events;
mod locks;
mod noise_thresholds;
mod thermostats;
mod webhooks;
mod workspaces;
