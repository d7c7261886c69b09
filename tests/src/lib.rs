mod registry_flow;
mod reports;
