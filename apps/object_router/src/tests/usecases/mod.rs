mod remove_node_use_case_test;
