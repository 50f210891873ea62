mod name_validator_tests;
