pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod http_transport;
        pub(crate) mod mi_global_iap_api_datasource;
        mod request_headers;
        mod request_path;
        mod request_signer;
        mod utils;
    }
    pub(crate) mod models {
        pub(crate) mod mi_global_iap_api {
            pub(crate) mod product_purchase_model;
            pub(crate) mod response_error_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod purchase_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod purchase_result;
        pub mod purchase_token;
    }
    pub mod repositories {
        pub mod purchase_repository;
    }
}

pub mod config;
pub(crate) mod constants;
pub mod errors;
pub mod util;
