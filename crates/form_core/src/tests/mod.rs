mod ledger_tests;
mod provider_tests;
