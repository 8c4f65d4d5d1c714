mod local_records;
