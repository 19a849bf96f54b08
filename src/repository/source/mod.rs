mod trip_log;
