/*
    * Service clients for outbound calls. Currently only the Remote PKG
    * Installer upload client lives here.
*/

pub mod installer;
