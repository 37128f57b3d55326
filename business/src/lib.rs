pub mod application {
    pub mod shopping_list {
        pub mod download;
    }
    pub mod short_link {
        pub mod create;
        pub mod resolve;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod recipe {
        pub mod model;
        pub mod repository;
    }
    pub mod shopping_list {
        pub mod aggregator;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod download;
        }
    }
    pub mod short_link {
        pub mod codec;
        pub mod errors;
        pub mod use_cases {
            pub mod create;
            pub mod resolve;
        }
    }
}
