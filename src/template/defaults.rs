//! Pages compiled into the binary, used unless a templates directory
//! provides a replacement.

pub const LIST: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>{{title}}</title>
</head>
<body>
<h1><a href="{{service_home}}">{{title}}</a></h1>
<form action="/search" method="get">
<input type="text" name="terms" value="{{query}}" placeholder="search links">
<input type="submit" value="Search">
</form>
<p><a href="/add">Add a link</a></p>
{{#if heading}}
<h2>{{heading}} ({{count}})</h2>
{{/if}}
<table style="width:100%" border="solid">
<tr>
<th>link</th>
<th>tags</th>
<th>notes</th>
<th>captured</th>
<th></th>
</tr>
{{#each links}}
<tr>
<td><a href="{{href}}">{{url}}</a></td>
<td>{{#each tags}}<a href="{{{href}}}">{{name}}</a> {{/each}}</td>
<td>{{notes}}</td>
<td><time datetime="{{timestamp}}">{{captured}}</time></td>
<td>
<a href="{{{edit_href}}}">edit</a>
<form action="/delete" method="post" style="display:inline">
<input type="hidden" name="url" value="{{url}}">
<input type="submit" value="delete">
</form>
</td>
</tr>
{{else}}
<tr>
<td></td>
<td></td>
<td></td>
<td></td>
<td></td>
</tr>
{{/each}}
</table>
</body>
</html>
"#;

pub const ADD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>{{title}} - add</title>
</head>
<body>
<h1>Add a link</h1>
<form action="/add" method="post">
<p><label>link <input type="text" name="link" size="80"></label></p>
<p><label>tags <input type="text" name="tags" size="80" placeholder="comma,separated"></label></p>
<p><label>notes<br><textarea name="notes" rows="4" cols="80"></textarea></label></p>
<p><input type="submit" value="Add"></p>
</form>
<p><a href="{{service_home}}">back</a></p>
</body>
</html>
"#;

pub const EDIT: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>{{title}} - edit</title>
</head>
<body>
<h1>Edit link</h1>
<form action="/edit" method="post">
<p><label>link <input type="text" name="url" size="80" value="{{url}}"></label></p>
<p><label>tags <input type="text" name="tags" size="80" value="{{tag_string}}"></label></p>
<p><label>notes<br><textarea name="notes" rows="4" cols="80">{{notes}}</textarea></label></p>
<p><input type="submit" value="Save"></p>
</form>
<p><a href="{{service_home}}">back</a></p>
</body>
</html>
"#;
