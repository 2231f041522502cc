mod builder_test;
mod gateway_test;
