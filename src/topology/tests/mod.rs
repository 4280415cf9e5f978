mod entity_set_tests;
