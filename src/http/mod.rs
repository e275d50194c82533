pub mod front;
pub mod helpers;
pub mod middlewares;
pub mod mock;
pub mod params;
pub mod protocol;
pub mod req;
pub mod router;
pub mod superglobals;
