/*
    * The routes module organizes logical route groupings (e.g., install, ping).
    * Each sub-module defines and registers specific endpoints.
*/

pub mod install_route;
pub mod ping_route;
