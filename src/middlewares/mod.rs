/*
    * Middleware module entry file. Re-exports our custom middlewares:
    * - response_logger
    * - start_time
*/

pub mod response_logger;
pub mod start_time;
