pub mod shared {
    pub mod infrastructure {
        pub mod cache;
    }
}

pub mod modules {
    pub mod high_score {
        pub mod core {
            pub mod state;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod get_high_score {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod submit_score {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod render_game {
                pub mod page;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
