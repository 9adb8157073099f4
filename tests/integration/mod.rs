mod http_routes;
