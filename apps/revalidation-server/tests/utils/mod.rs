pub mod api_clients;
pub mod mock_server;
