pub mod use_rpc_checker;
