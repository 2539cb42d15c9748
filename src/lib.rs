pub mod shared {
    pub mod infrastructure {
        pub mod confirmation;
    }
}

pub mod modules {
    pub mod projects {
        pub mod core {
            pub mod aggregation;
            pub mod record;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod add_project {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_dashboard {
                pub mod dashboard;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod import_projects {
                pub mod decode;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod clear_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod codecs;
            pub mod outbound {
                pub mod record_store;
                pub mod record_store_in_memory;
                pub mod record_store_json_file;
            }
        }
    }
}

pub mod shell;
