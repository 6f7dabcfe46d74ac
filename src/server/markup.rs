//! Static markup for the upload form

/// Landing page served on GET: one form, two mutually exclusive inputs
pub const UPLOAD_FORM: &str = r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>pagefuse — combine a web page into one file</title>
    <style>
        body {
            background: linear-gradient(135deg, #ececec, #f8f8f8);
            font-family: Arial, sans-serif;
            height: 100vh;
            display: flex;
            justify-content: center;
            align-items: center;
            margin: 0;
        }
        .upload-form {
            background: rgba(255, 255, 255, 0.8);
            backdrop-filter: blur(10px);
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.2);
            border-radius: 12px;
            padding: 30px;
            max-width: 400px;
            width: 100%;
            text-align: center;
        }
        input[type="file"],
        input[type="text"],
        input[type="submit"] {
            display: block;
            width: calc(100% - 40px);
            margin: 10px auto;
            padding: 10px;
            font-size: 16px;
            border: none;
            border-radius: 5px;
        }
        input[type="file"] {
            display: none;
        }
        label {
            background-color: #4caf50;
            color: white;
            padding: 10px 20px;
            border-radius: 5px;
            cursor: pointer;
            transition: background-color 0.3s;
        }
        label:hover {
            background-color: #45a049;
        }
        input[type="submit"] {
            background-color: #008cba;
            color: white;
            cursor: pointer;
            transition: background-color 0.3s;
            margin-top: 20px;
        }
        input[type="submit"]:hover {
            background-color: #007bb5;
        }
        h1 {
            color: #333;
        }
    </style>
</head>
<body>
    <div class="upload-form">
        <h1>Upload a ZIP File or Enter a URL</h1>
        <form method="post" enctype="multipart/form-data">
            <label for="file">Choose File</label>
            <input type="file" name="file" id="file">
            <input type="text" name="url" placeholder="Enter URL">
            <input type="submit" value="Process">
        </form>
    </div>
</body>
</html>
"#;
