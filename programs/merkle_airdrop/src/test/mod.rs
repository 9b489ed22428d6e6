
mod test_claim;
mod test_query;
