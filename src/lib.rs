pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod location;
            pub mod shift_record;
            pub mod state;
        }
        pub mod session {
            pub mod errors;
            pub mod manager;
            pub mod registry;
        }
        pub mod use_cases {
            pub mod start_shift {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod end_shift {
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod current_shift {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_shift {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_session {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod shift_documents;
            }
        }
    }
}

pub mod shell;
