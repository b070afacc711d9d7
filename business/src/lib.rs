pub mod application {
    pub mod catalog {
        pub mod deadline;
        pub mod get_by_id;
        pub mod get_filter_options;
        pub mod get_filter_stats;
        pub mod get_filtered_products;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod browse;
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod page;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod get_filter_options;
            pub mod get_filter_stats;
            pub mod get_filtered_products;
        }
    }
}
